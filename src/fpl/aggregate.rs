//! Season aggregation: joins team, picks, bootstrap and player data by gameweek.

use tracing::{debug, info, warn};

use crate::{
    cli::types::{Gameweek, PlayerId, TeamId},
    core::{fetch_ordered, DEFAULT_CONCURRENCY},
    fpl::{
        catalog::{PlayerCatalog, INVALID_POSITION},
        compute::{event_for_gameweek, select_captain},
        http::FplClient,
        types::{GameweekRecord, SeasonData},
    },
    Result,
};

/// Tuning knobs for [`get_data`].
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    /// Maximum requests in flight per fan-out stage
    pub concurrency: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Position label for a captain; a bad `element_type` in the catalog
/// degrades to [`INVALID_POSITION`] instead of failing the season.
fn captain_position_label(catalog: &PlayerCatalog, player_id: PlayerId, gameweek: Gameweek) -> String {
    catalog.position_label(player_id).unwrap_or_else(|e| {
        warn!(%player_id, %gameweek, error = %e, "captain position unavailable");
        INVALID_POSITION.to_string()
    })
}

/// Fetch and join a team's statistics for gameweeks 1 through `last_gameweek`.
///
/// 1. Fetch the team profile (unknown ids fail with `TeamNotFound`)
/// 2. Fetch every gameweek's picks, in parallel but kept in gameweek order
/// 3. Fetch the bootstrap data once for league averages and the player catalog
/// 4. Resolve each gameweek's captain and fetch their points for that gameweek
///
/// Any failure aborts the whole aggregation. The exceptions are a captain
/// missing from the catalog (named "ID not found"), a captain whose position
/// code is invalid (labelled "Unknown") and captain points that cannot be
/// fetched (counted as 0). Captain points are raw; the captain
/// multiplier is left to the presentation layer.
///
/// # Examples
///
/// ```rust,no_run
/// use fpl_stats::{fpl::aggregate::{get_data, AggregateOptions}, FplClient, Gameweek, TeamId};
///
/// # async fn example() -> fpl_stats::Result<()> {
/// let client = FplClient::from_env()?;
/// let data = get_data(&client, TeamId::new(2368852), Gameweek::new(7), AggregateOptions::default()).await?;
/// assert_eq!(data.points.len(), 7);
/// # Ok(())
/// # }
/// ```
pub async fn get_data(
    client: &FplClient,
    team_id: TeamId,
    last_gameweek: Gameweek,
    options: AggregateOptions,
) -> Result<SeasonData> {
    let last_gameweek = last_gameweek.validate()?;
    let gameweeks: Vec<Gameweek> = last_gameweek.through().collect();

    let profile = client.fetch_team_profile(team_id).await?;
    debug!(%team_id, team = %profile.name, "team profile loaded");

    let picks = fetch_ordered(gameweeks.clone(), options.concurrency, |gw| {
        let client = client.clone();
        async move { client.fetch_gameweek_picks(team_id, gw).await }
    })
    .await?;

    let bootstrap = client.fetch_league_bootstrap().await?;
    let catalog = PlayerCatalog::new(bootstrap.elements);
    debug!(players = catalog.len(), events = bootstrap.events.len(), "bootstrap loaded");

    let mut records = Vec::with_capacity(gameweeks.len());
    let mut captains: Vec<(PlayerId, Gameweek)> = Vec::with_capacity(gameweeks.len());

    for (gw, gw_picks) in gameweeks.iter().copied().zip(&picks) {
        let history = &gw_picks.entry_history;
        let event = event_for_gameweek(&bootstrap.events, gw)?;
        let captain = select_captain(&gw_picks.picks, gw)?;

        captains.push((captain.element, gw));
        records.push(GameweekRecord {
            gameweek: gw,
            points: history.points,
            gameweek_rank: history.rank,
            overall_rank: history.overall_rank,
            team_value: history.value,
            transfers: history.event_transfers,
            transfers_cost: history.event_transfers_cost,
            average_points: event.average_entry_score,
            highest_points: event.highest_score,
            captain_name: catalog.display_name(captain.element),
            captain_position: captain_position_label(&catalog, captain.element, gw),
            captain_points: 0,
        });
    }

    let captain_points = fetch_ordered(captains, options.concurrency, |(player_id, gw)| {
        let client = client.clone();
        async move { Ok(client.fetch_player_gameweek_points(player_id, gw).await) }
    })
    .await?;

    for (record, points) in records.iter_mut().zip(captain_points) {
        record.captain_points = points;
    }

    info!(%team_id, gameweeks = records.len(), "data retrieved successfully");
    Ok(SeasonData::from_records(profile, records))
}
