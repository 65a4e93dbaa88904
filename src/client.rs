//! HTTP client for the dashboard's REST API
//!
//! Only the two read endpoints the outlook needs are covered:
//! `GET /aqi/current` and `GET /aqi/forecast`. Transient failures are retried
//! with exponential backoff.

use crate::AirwatchError;
use crate::config::ApiConfig;
use crate::models::{AqiReading, ForecastPayload};
use crate::source::ForecastSource;
use chrono::{DateTime, Utc};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, instrument};

/// Body of `GET /api/aqi/current`
#[derive(Debug, Deserialize)]
struct CurrentAqiResponse {
    aqi: f64,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    pollutants: BTreeMap<String, f64>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

impl TryFrom<CurrentAqiResponse> for AqiReading {
    type Error = AirwatchError;

    fn try_from(response: CurrentAqiResponse) -> Result<Self, Self::Error> {
        let mut reading = AqiReading::new(response.aqi, response.pollutants)?;
        reading.location = response.location;
        reading.observed_at = response.timestamp;
        Ok(reading)
    }
}

/// Client for the dashboard API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: ClientWithMiddleware,
    base_url: String,
}

impl ForecastClient {
    /// Build a client with the configured timeout and retry policy
    pub fn new(config: &ApiConfig) -> crate::Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| AirwatchError::api(format!("Failed to build HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let http = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Current AQI reading
    #[instrument(name = "fetch_current", level = "debug", skip(self))]
    pub async fn current(&self) -> crate::Result<AqiReading> {
        let response: CurrentAqiResponse = self.get_json("aqi/current").await?;
        response.try_into()
    }

    /// Forecast payload. When the backend omits `current_aqi` it is filled
    /// in from the current reading.
    #[instrument(name = "fetch_forecast", level = "debug", skip(self))]
    pub async fn forecast(&self) -> crate::Result<ForecastPayload> {
        let mut payload: ForecastPayload = self.get_json("aqi/forecast").await?;

        if payload.current_aqi.is_none() {
            debug!("Forecast has no current_aqi, fetching the current reading");
            let reading = self.current().await?;
            payload.current_aqi = Some(reading.value());
        }

        Ok(payload)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AirwatchError::api(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AirwatchError::api(format!("GET {url} returned {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AirwatchError::api(format!("Failed to parse response from {url}: {e}")))
    }
}

impl ForecastSource for ForecastClient {
    async fn fetch_forecast(&self) -> crate::Result<ForecastPayload> {
        self.forecast().await
    }
}
