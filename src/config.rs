//! Configuration Module
//!
//! Loads client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API, ending in a slash
    pub api_url: String,
    /// Time-to-live of cached responses in milliseconds
    pub cache_interval_ms: u64,
    /// Number of location areas requested per page
    pub page_size: u32,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
}

const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/";
const DEFAULT_CACHE_INTERVAL_MS: u64 = 5_000;
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - API base URL (default: https://pokeapi.co/api/v2/)
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache time-to-live in ms (default: 5000)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    ///
    /// Unparseable or zero numeric values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| with_trailing_slash(v.trim()))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cache_interval_ms: parse_positive("POKEDEX_CACHE_INTERVAL_MS")
                .unwrap_or(DEFAULT_CACHE_INTERVAL_MS),
            page_size: parse_positive("POKEDEX_PAGE_SIZE").unwrap_or(DEFAULT_PAGE_SIZE),
            http_timeout_secs: parse_positive("POKEDEX_HTTP_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_interval_ms: DEFAULT_CACHE_INTERVAL_MS,
            page_size: DEFAULT_PAGE_SIZE,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

fn parse_positive<T>(name: &str) -> Option<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v: &T| *v != T::default())
}

/// Relative joins against a base without a trailing slash drop its last segment.
fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2/");
        assert_eq!(config.cache_interval(), Duration::from_secs(5));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_env() {
        // One test touches the environment so parallel tests cannot race on it
        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_CACHE_INTERVAL_MS");
        env::remove_var("POKEDEX_PAGE_SIZE");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cache_interval_ms, 5_000);
        assert_eq!(config.page_size, 20);

        env::set_var("POKEDEX_API_URL", "http://localhost:8080/api");
        env::set_var("POKEDEX_CACHE_INTERVAL_MS", "250");
        env::set_var("POKEDEX_PAGE_SIZE", "0");
        env::set_var("POKEDEX_HTTP_TIMEOUT_SECS", "abc");

        let config = Config::from_env();
        assert_eq!(config.api_url, "http://localhost:8080/api/");
        assert_eq!(config.cache_interval(), Duration::from_millis(250));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout_secs, 10);

        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_CACHE_INTERVAL_MS");
        env::remove_var("POKEDEX_PAGE_SIZE");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");
    }

    #[test]
    fn test_with_trailing_slash() {
        assert_eq!(with_trailing_slash("http://a/b"), "http://a/b/");
        assert_eq!(with_trailing_slash("http://a/b/"), "http://a/b/");
    }
}
