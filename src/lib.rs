//! Fantasy Premier League Season Statistics Library
//!
//! Fetches a manager's season from the public Fantasy Premier League API and
//! joins it into per-gameweek sequences ready for charting or reporting.
//!
//! ## Features
//!
//! - **Season Aggregation**: Points, ranks, team value, transfers and captain
//!   picks for every gameweek, index-aligned
//! - **League Context**: Average and highest score per gameweek
//! - **Double Gameweeks**: Captain points summed across both fixtures
//! - **Bounded Concurrency**: Per-gameweek requests fan out in parallel while
//!   results stay in gameweek order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_stats::{fpl::aggregate::{get_data, AggregateOptions}, FplClient, Gameweek, TeamId};
//!
//! # async fn example() -> fpl_stats::Result<()> {
//! let client = FplClient::from_env()?;
//! let season = get_data(&client, TeamId::new(2368852), Gameweek::new(7), AggregateOptions::default()).await?;
//! println!("{}: {:?}", season.team_name, season.points);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your team ID to avoid passing it in every command:
//! ```bash
//! export FPL_TEAM_ID=2368852
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;

// Re-export commonly used types
pub use cli::types::{Gameweek, PlayerId, Position, TeamId};
pub use error::{FplError, Result};
pub use fpl::http::FplClient;
pub use fpl::types::{GameweekRecord, SeasonData, TeamProfile};

pub const TEAM_ID_ENV_VAR: &str = "FPL_TEAM_ID";
