use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::{DayRecord, ForecastRequest};

use super::{FetchError, ForecastProvider};

const TIMELINE_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Requests block for at most this long before surfacing a timeout error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Visual Crossing timeline API.
///
/// One GET per [`fetch_day`](ForecastProvider::fetch_day) call, no retries,
/// no caching.
#[derive(Debug, Clone)]
pub struct VisualCrossingProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl VisualCrossingProvider {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { api_key, http, base_url: TIMELINE_BASE_URL.to_string() })
    }

    #[cfg(test)]
    fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, http: Client::new(), base_url }
    }
}

#[derive(Debug, Deserialize)]
struct TimelineResponse {
    #[serde(default)]
    days: Vec<DayRecord>,
}

#[async_trait]
impl ForecastProvider for VisualCrossingProvider {
    async fn fetch_day(&self, request: &ForecastRequest) -> Result<DayRecord, FetchError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&request.location),
            request.date.format("%Y-%m-%d"),
        );

        debug!(location = %request.location, date = %request.date, "requesting timeline forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("unitGroup", "metric"),
                ("include", "hours"),
                ("key", self.api_key.as_str()),
                ("contentType", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "unexpected status from weather service");
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        let parsed: TimelineResponse = serde_json::from_str(&body)?;

        parsed.days.into_iter().next().ok_or(FetchError::EmptyForecast)
    }
}
