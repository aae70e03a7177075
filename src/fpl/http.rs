//! Fetch layer for the Fantasy Premier League API.
//!
//! One method per upstream endpoint. Every call is a single GET with no
//! retries; errors come back typed so the aggregator can decide whether to
//! abort or degrade.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    cli::types::{Gameweek, PlayerId, TeamId},
    core::{build_client, resolve_base_url, BASE_URL_ENV_VAR},
    error::FplError,
    fpl::{
        compute::sum_round_points,
        types::{ElementSummary, GameweekPicks, LeagueBootstrap, TeamProfile},
    },
    Result,
};

#[cfg(test)]
mod tests;

/// Thin client over the FPL API. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// Client against an explicit base URL, e.g. a mock server in tests.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: resolve_base_url(Some(base_url.into())),
        })
    }

    /// Client against `FPL_API_BASE_URL`, or the public API when unset.
    pub fn from_env() -> Result<Self> {
        Self::new(resolve_base_url(std::env::var(BASE_URL_ENV_VAR).ok()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let res = self.client.get(&url).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(FplError::NotFound { url });
        }
        let body = res.error_for_status()?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /entry/{team_id}/`
    pub async fn fetch_team_profile(&self, team_id: TeamId) -> Result<TeamProfile> {
        self.get_json(&format!("entry/{}/", team_id))
            .await
            .map_err(|e| match e {
                FplError::NotFound { .. } => FplError::TeamNotFound { team_id },
                other => other,
            })
    }

    /// `GET /entry/{team_id}/event/{gameweek}/picks/`
    pub async fn fetch_gameweek_picks(
        &self,
        team_id: TeamId,
        gameweek: Gameweek,
    ) -> Result<GameweekPicks> {
        self.get_json(&format!("entry/{}/event/{}/picks/", team_id, gameweek))
            .await
    }

    /// `GET /bootstrap-static/`
    pub async fn fetch_league_bootstrap(&self) -> Result<LeagueBootstrap> {
        self.get_json("bootstrap-static/").await
    }

    /// `GET /element-summary/{player_id}/`
    pub async fn fetch_element_summary(&self, player_id: PlayerId) -> Result<ElementSummary> {
        self.get_json(&format!("element-summary/{}/", player_id))
            .await
    }

    /// Points a player scored in one gameweek, summed over double gameweeks.
    ///
    /// Never fails: any fetch or parse error is logged and counts as 0.
    pub async fn fetch_player_gameweek_points(
        &self,
        player_id: PlayerId,
        gameweek: Gameweek,
    ) -> i64 {
        match self.fetch_element_summary(player_id).await {
            Ok(summary) => sum_round_points(&summary.history, gameweek),
            Err(e) => {
                warn!(%player_id, %gameweek, error = %e, "player points unavailable, using 0");
                0
            }
        }
    }
}
