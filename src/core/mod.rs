//! Core utilities for the FPL season statistics CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: HTTP client construction and API base-URL resolution
//! - `fanout`: Bounded, order-preserving concurrent fetches

pub mod fanout;
pub mod http;

// Re-export commonly used items for convenience
pub use fanout::{fetch_ordered, DEFAULT_CONCURRENCY};
pub use http::{build_client, resolve_base_url, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
