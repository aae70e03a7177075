//! Type-safe wrappers and enums for Fantasy Premier League data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use position::Position;
pub use time::{Gameweek, MAX_GAMEWEEK};
