//! Gameweek type for Fantasy Premier League seasons.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of gameweeks in a Premier League season.
pub const MAX_GAMEWEEK: u16 = 38;

/// Type-safe wrapper for gameweek numbers.
///
/// Gameweeks are 1-based. `Gameweek(0)` is accepted as a "last gameweek"
/// bound meaning "no gameweeks played yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub fn new(gameweek: u16) -> Self {
        Self(gameweek)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Check the gameweek lies within `0..=MAX_GAMEWEEK`.
    pub fn validate(self) -> Result<Self> {
        if self.0 > MAX_GAMEWEEK {
            return Err(FplError::InvalidGameweek {
                gameweek: self.0,
                max: MAX_GAMEWEEK,
            });
        }
        Ok(self)
    }

    /// All gameweeks from 1 through `self`, inclusive.
    pub fn through(self) -> impl Iterator<Item = Gameweek> {
        (1..=self.0).map(Gameweek)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Self(s.trim().parse()?).validate()
    }
}
