//! Error types for the FPL season statistics CLI

use thiserror::Error;

use crate::cli::types::{Gameweek, TeamId};


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Team ID not provided and {env_var} environment variable not set")]
    MissingTeamId { env_var: String },

    #[error("Team ID must be a positive integer")]
    InvalidTeamId,

    #[error("Gameweek {gameweek} is out of range (0..={max})")]
    InvalidGameweek { gameweek: u16, max: u16 },

    #[error("Team {team_id} not found")]
    TeamNotFound { team_id: TeamId },

    #[error("FPL API returned 404 for {url}")]
    NotFound { url: String },

    #[error("No league event data for gameweek {gameweek}")]
    MissingEvent { gameweek: Gameweek },

    #[error("No captain flagged in gameweek {gameweek}")]
    CaptainNotFound { gameweek: Gameweek },

    #[error("Invalid position code: {code}")]
    InvalidPosition { code: u8 },
}
