//! Command implementations for the FPL season statistics CLI

pub mod player_points;
pub mod season_data;


use crate::{error::FplError, Result, TeamId, TEAM_ID_ENV_VAR};

/// Resolve the team ID from the CLI flag, falling back to `FPL_TEAM_ID`.
pub fn resolve_team_id(team_id: Option<TeamId>) -> Result<TeamId> {
    resolve_team_id_with(team_id, std::env::var(TEAM_ID_ENV_VAR).ok())
}

/// Same as [`resolve_team_id`] with the environment value passed in.
///
/// An env value that is present but not a valid team ID is an error rather
/// than being silently ignored.
pub fn resolve_team_id_with(team_id: Option<TeamId>, env_value: Option<String>) -> Result<TeamId> {
    if let Some(id) = team_id {
        return Ok(id);
    }
    match env_value {
        Some(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Err(FplError::MissingTeamId {
            env_var: TEAM_ID_ENV_VAR.to_string(),
        }),
    }
}
