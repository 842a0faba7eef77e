use crate::model::{DayRecord, ForecastRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod visualcrossing;

/// Errors surfaced while fetching a forecast.
///
/// `Status` and `EmptyForecast` mean the service answered but had nothing
/// usable for the request; callers typically report those as "no data" and
/// exit normally. The remaining variants are genuine faults.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather service answered with status {0}")]
    Status(StatusCode),

    #[error("weather service did not answer in time")]
    Timeout(#[source] reqwest::Error),

    #[error("failed to reach weather service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode weather service payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("forecast payload contained no days")]
    EmptyForecast,
}

impl FetchError {
    /// True for outcomes that should read as "no data" rather than a fault.
    pub fn is_no_data(&self) -> bool {
        matches!(self, FetchError::Status(_) | FetchError::EmptyForecast)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout(err) } else { FetchError::Transport(err) }
    }
}

/// A source of day forecasts. The single production implementation talks to
/// the Visual Crossing timeline API; tests substitute their own.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_day(&self, request: &ForecastRequest) -> Result<DayRecord, FetchError>;
}
