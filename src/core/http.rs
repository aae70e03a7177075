//! HTTP utilities for FPL API communication

use std::time::Duration;

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

/// Public base path of the Fantasy Premier League API.
pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Headers sent with every request.
pub fn default_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// Build the shared client with default headers and a per-request timeout.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .default_headers(default_headers()?)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Pick the API base URL: an explicit override wins, then the default.
///
/// Trailing slashes are stripped so paths can be appended with `/`.
pub fn resolve_base_url(override_url: Option<String>) -> String {
    override_url
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}
