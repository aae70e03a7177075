//! Fantasy Premier League position types.

use crate::error::FplError;
use serde::Serialize;
use std::fmt;

/// Player positions, in the order of the FPL `element_type` codes.
///
/// # Examples
///
/// ```rust
/// use fpl_stats::Position;
///
/// assert_eq!(Position::try_from(4).unwrap(), Position::ST);
/// assert_eq!(Position::DEF.to_string(), "DEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    GK,
    DEF,
    MID,
    ST,
}

impl Position {
    /// All positions in `element_type` order.
    pub const ALL: [Position; 4] = [Position::GK, Position::DEF, Position::MID, Position::ST];

    /// Convert an FPL `element_type` code (1-4) to a Position.
    pub fn try_from(code: u8) -> Result<Self, FplError> {
        match code {
            1..=4 => Ok(Self::ALL[usize::from(code - 1)]),
            _ => Err(FplError::InvalidPosition { code }),
        }
    }

    /// The FPL `element_type` code for this position.
    pub fn to_u8(&self) -> u8 {
        match self {
            Position::GK => 1,
            Position::DEF => 2,
            Position::MID => 3,
            Position::ST => 4,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::ST => "ST",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_element_type_mappings() {
        assert_eq!(Position::try_from(1).unwrap(), Position::GK);
        assert_eq!(Position::try_from(2).unwrap(), Position::DEF);
        assert_eq!(Position::try_from(3).unwrap(), Position::MID);
        assert_eq!(Position::try_from(4).unwrap(), Position::ST);

        for pos in Position::ALL {
            assert_eq!(Position::try_from(pos.to_u8()).unwrap(), pos);
        }
    }

    #[test]
    fn test_out_of_range_codes() {
        assert!(matches!(
            Position::try_from(0),
            Err(FplError::InvalidPosition { code: 0 })
        ));
        assert!(matches!(
            Position::try_from(5),
            Err(FplError::InvalidPosition { code: 5 })
        ));
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::GK.to_string(), "GK");
        assert_eq!(Position::ST.to_string(), "ST");
        let labels: Vec<String> = Position::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, vec!["GK", "DEF", "MID", "ST"]);
    }
}
