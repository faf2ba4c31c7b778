//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Cache Error ==
/// Reasons a cache cannot be constructed.
///
/// Lookups and writes never fail; a missing or stale entry is a plain miss.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The time-to-live must be longer than zero
    #[error("Cache interval must be greater than zero")]
    InvalidInterval,

    /// The first sweep deadline would overflow the clock
    #[error("Cache interval is too large to schedule")]
    IntervalTooLarge,

    /// The reaper task needs a Tokio runtime to run on
    #[error("Cache must be created inside a Tokio runtime")]
    NoRuntime,
}

// == Pokedex Error ==
/// Errors surfaced by the API client and REPL commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: StatusCode, url: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured or server-provided URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Cache setup failed
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl PokedexError {
    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
