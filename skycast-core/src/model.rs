use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the user asked for: a free-text place name and a calendar date.
/// The location is forwarded to the API as-is, empty strings included.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub location: String,
    pub date: NaiveDate,
}

/// One calendar day's weather summary, taken verbatim from the timeline
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub sunrise: String,
    pub sunset: String,
    pub moonphase: f64,
    #[serde(default)]
    pub hours: Vec<HourRecord>,
}

/// One hour's observations within a [`DayRecord`].
///
/// Every field except `winddir` is required; a payload missing one fails
/// deserialization. The API occasionally omits `winddir`, which the original
/// data source treats as due north.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourRecord {
    pub datetime: String,
    pub temp: f64,
    pub feelslike: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub windgust: f64,
    #[serde(default)]
    pub winddir: f64,
    pub visibility: f64,
    pub cloudcover: f64,
    pub uvindex: f64,
    pub precipprob: f64,
    pub precip: f64,
    pub conditions: String,
}

impl HourRecord {
    /// Compass point for this hour's wind bearing.
    pub fn wind_cardinal(&self) -> &'static str {
        degrees_to_cardinal(self.winddir)
    }
}

const CARDINALS: [&str; 9] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "N"];

/// Map a wind bearing in degrees to one of 8 compass points.
///
/// Each point covers a 45° slice centered on its bearing. Ties at the 22.5°
/// slice boundaries round away from zero, so 22.5° is NE and 67.5° is E.
pub fn degrees_to_cardinal(degrees: f64) -> &'static str {
    let ix = (degrees / 45.0).round() as usize;
    CARDINALS[ix % 8]
}
