//! Read-through caching wrapper around the upstream client.

use worldbank_api::types::{Country, SeriesPoint};
use worldbank_api::Client;

use crate::cache::MemoryCache;
use crate::error::WorldBankError;

/// Cache key for the full country catalog.
const COUNTRIES_KEY: &str = "countries:all";

/// Upstream client wrapper that adds in-memory read-through caching.
///
/// Cache hits bypass the network entirely; misses fetch, populate the cache,
/// and return the fresh value. Concurrent misses on the same key may fetch
/// more than once; the values are idempotent and the last write wins.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
}

impl CachedClient {
    /// Creates a new cached client using the production API URL.
    pub fn new(cache: MemoryCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
        }
    }

    /// Creates a new cached client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, cache: MemoryCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            cache,
        }
    }

    /// Fetches the full country catalog, returning the cached snapshot when fresh.
    pub async fn all_countries(&self) -> Result<Vec<Country>, WorldBankError> {
        if let Some(cached) = self.cache.get(COUNTRIES_KEY) {
            tracing::debug!("country catalog served from cache");
            let countries: Vec<Country> = serde_json::from_str(&cached)?;
            return Ok(countries);
        }

        let countries = self.inner.get_countries().await?;
        if let Ok(json) = serde_json::to_string(&countries) {
            self.cache.set(COUNTRIES_KEY.to_string(), json);
        }
        Ok(countries)
    }

    /// Fetches one indicator series, cached per country/indicator/range.
    pub async fn indicator_series(
        &self,
        country_code: &str,
        indicator_code: &str,
        years: i64,
    ) -> Result<Vec<SeriesPoint>, WorldBankError> {
        let cache_key = format!("series:{}:{}:{}", country_code, indicator_code, years);

        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!("series {} served from cache", cache_key);
            let points: Vec<SeriesPoint> = serde_json::from_str(&cached)?;
            return Ok(points);
        }

        let points = self
            .inner
            .get_indicator(country_code, indicator_code, years)
            .await?;
        if let Ok(json) = serde_json::to_string(&points) {
            self.cache.set(cache_key, json);
        }
        Ok(points)
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
