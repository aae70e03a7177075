//! ID types for Fantasy Premier League entities.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL team (entry) IDs.
///
/// The team ID is the number in the URL of a manager's Points page, e.g.
/// `fantasy.premierleague.com/entry/2368852/event/7`.
///
/// # Examples
///
/// ```rust
/// use fpl_stats::TeamId;
///
/// let team_id: TeamId = "2368852".parse().unwrap();
/// assert_eq!(team_id.as_u32(), 2368852);
/// assert!("0".parse::<TeamId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let id: u32 = s.trim().parse()?;
        if id == 0 {
            return Err(FplError::InvalidTeamId);
        }
        Ok(Self(id))
    }
}

/// Type-safe wrapper for player (element) IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
