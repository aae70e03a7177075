//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{Gameweek, PlayerId, TeamId};

use crate::core::fanout::DEFAULT_CONCURRENCY;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch a team's season statistics, one row per gameweek.
    ///
    /// Queries `/entry/{id}/`, `/entry/{id}/event/{gw}/picks/` for every
    /// gameweek, `/bootstrap-static/` once, and `/element-summary/{id}/`
    /// for each captain.
    SeasonData {
        /// Team ID (or set `FPL_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Most recent gameweek to include (e.g. 7 means gameweeks 1-7).
        #[clap(long, short = 'g')]
        last_gameweek: Gameweek,

        /// Output results as JSON instead of a text report.
        #[clap(long)]
        json: bool,

        /// Maximum number of requests in flight at once.
        #[clap(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },

    /// Show one player's raw points for a single gameweek.
    ///
    /// Double gameweeks are summed across both fixtures.
    PlayerPoints {
        /// Player (element) ID.
        #[clap(long, short)]
        player_id: PlayerId,

        /// Gameweek number.
        #[clap(long, short = 'g')]
        gameweek: Gameweek,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-stats", about = "Fantasy Premier League season statistics CLI")]
pub struct Fpl {
    /// Log progress to stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Fantasy Premier League API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
