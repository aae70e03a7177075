use tracing::warn;

use crate::{
    cli::types::Gameweek,
    error::FplError,
    fpl::types::{EventSummary, HistoryEntry, Pick},
    Result,
};


/// Sum `total_points` over every history entry for `gameweek`.
///
/// A double gameweek has two entries with the same round; a blank one has none.
pub fn sum_round_points(history: &[HistoryEntry], gameweek: Gameweek) -> i64 {
    history
        .iter()
        .filter(|h| h.round == gameweek)
        .map(|h| h.total_points)
        .sum()
}

/// Select the captain from a gameweek's picks.
///
/// No flagged captain is an error. With several flagged, the first wins.
pub fn select_captain(picks: &[Pick], gameweek: Gameweek) -> Result<&Pick> {
    let mut flagged = picks.iter().filter(|p| p.is_captain);
    let captain = flagged
        .next()
        .ok_or(FplError::CaptainNotFound { gameweek })?;

    let extra = flagged.count();
    if extra > 0 {
        warn!(%gameweek, extra, "multiple captains flagged, using the first");
    }
    Ok(captain)
}

/// League aggregates for a 1-based gameweek out of the 0-based events list.
pub fn event_for_gameweek(events: &[EventSummary], gameweek: Gameweek) -> Result<&EventSummary> {
    usize::from(gameweek.as_u16())
        .checked_sub(1)
        .and_then(|idx| events.get(idx))
        .ok_or(FplError::MissingEvent { gameweek })
}
