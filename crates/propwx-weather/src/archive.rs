//! Open-Meteo archive API client.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;

use crate::error::FetchError;
use crate::types::{ArchiveResponse, HourlySeries};

const DEFAULT_BASE_URL: &str = "https://archive-api.open-meteo.com";
const HOURLY_VARIABLES: &str = "temperature_2m,relative_humidity_2m";

/// Client for the historical weather archive.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    /// Create a client with the given request timeout.
    ///
    /// # Errors
    /// Returns `FetchError::Network` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different archive host (tests, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the hourly series for a coordinate over an inclusive date range.
    ///
    /// # Errors
    /// Returns `FetchError::Status` for a non-2xx response, `FetchError::Decode`
    /// for an undecodable body, and `FetchError::Network` for transport failures.
    pub async fn fetch_hourly(
        &self,
        lat: f64,
        lon: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HourlySeries, FetchError> {
        let url = format!(
            "{}/v1/archive?latitude={}&longitude={}&start_date={}&end_date={}&hourly={}",
            self.base_url, lat, lon, start_date, end_date, HOURLY_VARIABLES
        );

        tracing::debug!("Fetching hourly archive: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Archive API returned status {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!("Received {} hourly entries", body.hourly.len());
        Ok(body.hourly)
    }
}
