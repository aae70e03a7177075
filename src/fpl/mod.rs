//! Fantasy Premier League API access and season aggregation
//!
//! - `http`: one client method per upstream endpoint
//! - `types`: serde payloads and the aggregated `SeasonData`
//! - `catalog`: player id to name/position resolution
//! - `compute`: per-gameweek helpers (double gameweeks, captain, events)
//! - `aggregate`: the `get_data` entry point

pub mod aggregate;
pub mod catalog;
pub mod compute;
pub mod http;
pub mod types;
