//! HTTP client for the World Bank v2 open data API.

use std::time::Duration;

use chrono::{Datelike, Utc};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{Country, SeriesPoint, WbCountry, WbSeriesPoint},
    Error,
};

/// Page size for the `/country` listing. The provider lists roughly 300
/// countries and aggregate rows, so one page covers the full set.
const COUNTRY_PAGE_SIZE: u32 = 350;

const USER_AGENT: &str = concat!("worldbank-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the World Bank v2 API.
///
/// Responses arrive as a two-element JSON array `[metadata, records]`.
/// Error payloads replace the records element with a message object or
/// `null`; those are normalized to an empty record set so that callers can
/// tell "provider has nothing for this query" apart from a transport
/// failure. Each request builds a fresh `reqwest::Client` with a 30-second
/// timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.worldbank.org/v2`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production World Bank API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://api.worldbank.org/v2".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let mut url =
            Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        url.query_pairs_mut().append_pair("format", "json");
        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    /// Performs one GET and unwraps the `[metadata, records]` envelope.
    ///
    /// A records element that is missing, `null`, or not an array is treated
    /// as an empty record set, not an error.
    async fn get_records<T>(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, params)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let envelope = serde_json::from_str::<Vec<serde_json::Value>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        let records = match envelope.into_iter().nth(1) {
            Some(records @ serde_json::Value::Array(_)) => records,
            other => {
                // Error payloads put a message object where the records
                // array belongs; surface them as "no records".
                tracing::warn!(
                    "Non-array records element from {}: {}",
                    path,
                    other.map(|v| truncate_body(&v.to_string())).unwrap_or_default()
                );
                return Ok(Vec::new());
            }
        };

        serde_json::from_value(records).map_err(|e| {
            tracing::error!("Failed to parse records from {}: {}", path, e);
            Error::RequestFailed
        })
    }

    /// Fetches the full country catalog in a single page.
    ///
    /// Aggregate rows (regions, income groups) and entries without a
    /// two-letter ISO code are filtered out.
    pub async fn get_countries(&self) -> Result<Vec<Country>, Error> {
        let raw: Vec<WbCountry> = self
            .get_records("/country", &[("per_page", COUNTRY_PAGE_SIZE.to_string())])
            .await?;
        Ok(raw
            .into_iter()
            .filter(|c| !c.iso2_code.is_empty() && c.region.value != "Aggregates")
            .map(Country::from)
            .collect())
    }

    /// Fetches one indicator's observations for a country over the last
    /// `years` years, newest first.
    pub async fn get_indicator(
        &self,
        country_code: &str,
        indicator_code: &str,
        years: i64,
    ) -> Result<Vec<SeriesPoint>, Error> {
        let current_year = i64::from(Utc::now().year());
        let date_range = format!("{}:{}", current_year - years, current_year);
        let path = format!("/country/{}/indicator/{}", country_code, indicator_code);
        let raw: Vec<WbSeriesPoint> = self
            .get_records(
                &path,
                &[("date", date_range), ("per_page", years.to_string())],
            )
            .await?;
        Ok(raw.into_iter().map(SeriesPoint::from).collect())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
