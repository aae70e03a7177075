//! Player points command: one player's raw points for one gameweek.

use crate::{
    cli::types::{Gameweek, PlayerId},
    fpl::{catalog::PlayerCatalog, http::FplClient, types::PlayerPoints},
    Result,
};

/// Look up a player in the catalog and fetch their gameweek points.
pub async fn player_points(
    client: &FplClient,
    player_id: PlayerId,
    gameweek: Gameweek,
) -> Result<PlayerPoints> {
    let gameweek = gameweek.validate()?;
    let bootstrap = client.fetch_league_bootstrap().await?;
    let catalog = PlayerCatalog::new(bootstrap.elements);

    Ok(PlayerPoints {
        id: player_id,
        name: catalog.display_name(player_id),
        position: catalog.position_label(player_id)?,
        gameweek,
        points: client.fetch_player_gameweek_points(player_id, gameweek).await,
    })
}

/// Handle the player points command
pub async fn handle_player_points(player_id: PlayerId, gameweek: Gameweek) -> Result<()> {
    let client = FplClient::from_env()?;
    // tarpaulin::skip - HTTP calls, tested via integration tests
    let p = player_points(&client, player_id, gameweek).await?;

    println!(
        "{} ({}) [{}] GW{}: {} pts",
        p.name, p.position, p.id, p.gameweek, p.points
    );
    Ok(())
}
