//! Location-area API client.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage};

/// Client for the location-area endpoints.
///
/// Every successful response body is cached under its full request URL, so
/// paging back and forth or exploring an area twice within the cache interval
/// does not hit the network again.
#[derive(Debug)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: u32,
    cache: TtlCache,
}

impl PokeClient {
    /// Creates a client from configuration, building its own cache.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = TtlCache::new(config.cache_interval())?;
        Self::new(config, cache)
    }

    /// Creates a client that stores responses in `cache`.
    pub fn new(config: &Config, cache: TtlCache) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url,
            page_size: config.page_size,
            cache,
        })
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// URL of the first page of the location-area listing.
    pub fn first_page_url(&self) -> String {
        let mut url = self.endpoint(&["location-area"]);
        url.query_pairs_mut()
            .append_pair("offset", "0")
            .append_pair("limit", &self.page_size.to_string());
        url.into()
    }

    /// URL of a single location area's detail.
    pub fn location_area_url(&self, name: &str) -> String {
        self.endpoint(&["location-area", name]).into()
    }

    // == Location Areas ==
    /// Fetches one page of location areas from `url`.
    ///
    /// `url` is either [`first_page_url`](Self::first_page_url) or a
    /// `next`/`previous` link from an earlier page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    // == Location Area Detail ==
    /// Fetches the detail of the location area called `name`.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = self.location_area_url(name);
        self.fetch_json(&url).await
    }

    /// Stops the cache's reaper and waits for it to exit.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base URL can carry a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url) {
            match serde_json::from_slice(&body) {
                Ok(value) => {
                    debug!(url, "cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    warn!(url, error = %err, "cached body failed to decode, refetching");
                }
            }
        }

        let body = self.fetch_bytes(url).await?;
        self.cache.add(url, body.clone());
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        debug!(url, "fetching from network");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}
