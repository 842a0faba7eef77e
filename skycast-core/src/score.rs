use crate::model::HourRecord;

/// Rate how favorable a run of hours is for visual sky observation.
///
/// Each hour earns up to 5 points apiece for clear skies, long visibility,
/// calm wind and dry air. The per-hour totals are averaged over the run,
/// scaled by 4 and rounded to 2 decimal places. Returns `None` for an empty
/// slice.
///
/// The scale factor puts a perfect hour at 80 rather than the intended
/// 0–20 range.
// TODO: settle the intended output scale before wiring this into the report.
pub fn sky_observability(hours: &[HourRecord]) -> Option<f64> {
    if hours.is_empty() {
        return None;
    }

    let total: f64 = hours.iter().map(hour_score).sum();
    let average = total / hours.len() as f64 * 4.0;

    Some((average * 100.0).round() / 100.0)
}

fn hour_score(hour: &HourRecord) -> f64 {
    let cloud = (100.0 - hour.cloudcover) / 100.0 * 5.0;
    let visibility = (hour.visibility / 10.0).min(1.0) * 5.0;
    let wind = (1.0 - (hour.windspeed / 20.0).min(1.0)) * 5.0;
    let humidity = (1.0 - (hour.humidity / 100.0).min(1.0)) * 5.0;

    cloud + visibility + wind + humidity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(cloudcover: f64, visibility: f64, windspeed: f64, humidity: f64) -> HourRecord {
        HourRecord {
            datetime: "00:00:00".to_string(),
            temp: 10.0,
            feelslike: 10.0,
            humidity,
            windspeed,
            windgust: 0.0,
            winddir: 0.0,
            visibility,
            cloudcover,
            uvindex: 0.0,
            precipprob: 0.0,
            precip: 0.0,
            conditions: "Clear".to_string(),
        }
    }

    #[test]
    fn perfect_hour_scores_eighty() {
        let hours = [hour(0.0, 10.0, 0.0, 0.0)];
        assert_eq!(sky_observability(&hours), Some(80.0));
    }

    #[test]
    fn worst_hour_scores_zero() {
        let hours = [hour(100.0, 0.0, 20.0, 100.0)];
        assert_eq!(sky_observability(&hours), Some(0.0));
    }

    #[test]
    fn subscores_saturate_instead_of_going_negative() {
        // Gale-force wind and 30 km visibility both clamp at their caps.
        let hours = [hour(0.0, 30.0, 90.0, 0.0)];
        assert_eq!(sky_observability(&hours), Some(60.0));
    }

    #[test]
    fn score_averages_over_the_run() {
        let hours = [hour(0.0, 10.0, 0.0, 0.0), hour(100.0, 0.0, 20.0, 100.0)];
        assert_eq!(sky_observability(&hours), Some(40.0));
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        // One third of the cloud points: (2/3 * 5 + 15) / 1 * 4 = 73.3333...
        let hours = [hour(100.0 / 3.0, 10.0, 0.0, 0.0)];
        assert_eq!(sky_observability(&hours), Some(73.33));
    }

    #[test]
    fn empty_run_has_no_score() {
        assert_eq!(sky_observability(&[]), None);
    }
}
