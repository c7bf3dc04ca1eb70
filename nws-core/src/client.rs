use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::Config,
    model::{AlertCollection, AlertFeature, BLOCK_SEPARATOR, Forecast, ForecastPeriod, GridPoint},
};

/// Returned when the alerts endpoint cannot be reached or decoded.
pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
/// Returned when the alerts endpoint answers with an empty feature list.
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";
/// Returned when the points lookup fails or carries no forecast URL.
pub const FORECAST_POINT_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
/// Returned when the resolved forecast URL cannot be fetched or decoded.
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";

/// Forecasts are cut to the first five periods.
const FORECAST_PERIOD_LIMIT: usize = 5;

const GEO_JSON: &str = "application/geo+json";

/// What can go wrong between sending a request and decoding its body.
///
/// Callers of the public operations never see this type: every variant is
/// logged and collapsed into the no-data sentinel at the fetch boundary.
#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Body(String),
}

/// The two queries a hosting runtime can bind as callable operations.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Active alerts for a region code (e.g. a two-letter US state code).
    async fn get_alerts(&self, region: &str) -> String;

    /// Short-term forecast for a coordinate pair.
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> String;
}

/// Client for the National Weather Service REST API.
#[derive(Debug, Clone)]
pub struct NwsClient {
    config: Config,
    http: Client,
}

impl NwsClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    fn alerts_url(&self, region: &str) -> String {
        format!("{}/alerts/active/area/{}", self.config.base_url, region)
    }

    fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", self.config.base_url, latitude, longitude)
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Returns `None` on any failure: connect error, timeout, non-2xx
    /// status, or an undecodable body. The cause only goes to the log.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.request(url).await {
            Ok(doc) => Some(doc),
            Err(err) => {
                warn!(url, error = %err, "NWS request failed");
                None
            }
        }
    }

    async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "NWS request");

        let res = self
            .http
            .get(url)
            .header(header::ACCEPT, GEO_JSON)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[async_trait]
impl WeatherSource for NwsClient {
    async fn get_alerts(&self, region: &str) -> String {
        let url = self.alerts_url(region);

        let Some(alerts) = self.fetch_json::<AlertCollection>(&url).await else {
            return ALERTS_UNAVAILABLE.to_string();
        };

        if alerts.features.is_empty() {
            return NO_ACTIVE_ALERTS.to_string();
        }

        alerts
            .features
            .iter()
            .map(AlertFeature::format)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }

    async fn get_forecast(&self, latitude: f64, longitude: f64) -> String {
        // The forecast URL is not derivable from the coordinates; it has
        // to be resolved through the points endpoint first.
        let points_url = self.points_url(latitude, longitude);

        let forecast_url = self
            .fetch_json::<GridPoint>(&points_url)
            .await
            .and_then(|point| point.properties.forecast);

        let Some(forecast_url) = forecast_url else {
            return FORECAST_POINT_UNAVAILABLE.to_string();
        };

        let Some(forecast) = self.fetch_json::<Forecast>(&forecast_url).await else {
            return FORECAST_UNAVAILABLE.to_string();
        };

        forecast
            .properties
            .periods
            .iter()
            .take(FORECAST_PERIOD_LIMIT)
            .map(ForecastPeriod::format)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }
}
