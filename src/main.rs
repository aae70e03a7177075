//! Entry point: parse CLI, install logging and dispatch to command handlers.

use clap::Parser;
use fpl_stats::{
    cli::{Commands, Fpl, GetCmd},
    commands::{
        player_points::handle_player_points,
        season_data::{handle_season_data, SeasonDataParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr keeps stdout clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Fpl::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::SeasonData {
                team_id,
                last_gameweek,
                json,
                concurrency,
            } => {
                handle_season_data(SeasonDataParams {
                    team_id,
                    last_gameweek,
                    as_json: json,
                    concurrency,
                })
                .await?
            }

            GetCmd::PlayerPoints {
                player_id,
                gameweek,
            } => handle_player_points(player_id, gameweek).await?,
        },
    }

    Ok(())
}
