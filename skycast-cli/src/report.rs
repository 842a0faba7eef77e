use chrono::NaiveDate;

use skycast_core::{DayRecord, HourRecord, MoonPhase};

const HEADERS: [&str; 11] = [
    "Time", "Temperature", "Humidity", "Wind", "Gusts", "Direction", "Visibility", "Clouds", "UV",
    "Precipitations", "Conditions",
];
const COL_WIDTHS: [usize; 11] = [16, 26, 10, 10, 10, 10, 12, 8, 5, 20, 22];

/// Render the full report: five header lines and one table row per hour,
/// in the order the API returned them.
pub fn render(location: &str, date: NaiveDate, day: &DayRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n🌃 Town: {location}\n"));
    out.push_str(&format!("📆 Date: {date}\n"));
    out.push_str(&format!("🌆 Sunrise: {}\n", day.sunrise));
    out.push_str(&format!("🌇 Sunset: {}\n", day.sunset));
    out.push_str(&format!("🌙 Moonphase: {}\n", MoonPhase::from_fraction(day.moonphase)));

    out.push_str(&border("┌", "┬", "┐"));
    out.push_str(&table_row(HEADERS.map(String::from)));
    out.push_str(&border("├", "┼", "┤"));

    for hour in &day.hours {
        out.push_str(&table_row(hour_cells(hour)));
    }

    out.push_str(&border("└", "┴", "┘"));
    out
}

fn hour_cells(hour: &HourRecord) -> [String; 11] {
    [
        hour.datetime.clone(),
        format!("{}°C (feels like {}°C)", hour.temp, hour.feelslike),
        format!("{}%", hour.humidity),
        format!("{} km/h", hour.windspeed),
        format!("{} km/h", hour.windgust),
        hour.wind_cardinal().to_string(),
        format!("{} km", hour.visibility),
        format!("{}%", hour.cloudcover),
        format!("{}", hour.uvindex),
        format!("{}%, {}mm", hour.precipprob, hour.precip),
        hour.conditions.clone(),
    ]
}

fn table_row(cells: [String; 11]) -> String {
    let padded: Vec<String> =
        cells.iter().zip(COL_WIDTHS).map(|(cell, width)| center(cell, width)).collect();

    format!("│{}│\n", padded.join("│"))
}

fn border(left: &str, mid: &str, right: &str) -> String {
    let spans: Vec<String> = COL_WIDTHS.iter().map(|width| "─".repeat(*width)).collect();

    format!("{left}{}{right}\n", spans.join(mid))
}

/// Center `text` in a `width`-character cell. Content wider than the cell is
/// returned untouched, so an oversized value pushes the row past the border.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let left = (width - len) / 2;
    let right = width - len - left;

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour() -> HourRecord {
        HourRecord {
            datetime: "13:00:00".to_string(),
            temp: 21.3,
            feelslike: 21.0,
            humidity: 47.2,
            windspeed: 12.6,
            windgust: 20.5,
            winddir: 250.0,
            visibility: 24.1,
            cloudcover: 12.5,
            uvindex: 6.0,
            precipprob: 0.0,
            precip: 0.0,
            conditions: "Clear".to_string(),
        }
    }

    fn day(moonphase: f64) -> DayRecord {
        DayRecord {
            sunrise: "06:32:10".to_string(),
            sunset: "21:04:45".to_string(),
            moonphase,
            hours: vec![hour()],
        }
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    #[test]
    fn header_lines_cover_the_day_metadata() {
        let out = render("Paris", test_date(), &day(0.0));

        assert!(out.contains("🌃 Town: Paris"));
        assert!(out.contains("📆 Date: 2024-05-01"));
        assert!(out.contains("🌆 Sunrise: 06:32:10"));
        assert!(out.contains("🌇 Sunset: 21:04:45"));
    }

    #[test]
    fn moon_phase_text_follows_the_fraction() {
        assert!(render("Paris", test_date(), &day(0.0)).contains("new moon"));
        assert!(render("Paris", test_date(), &day(0.5)).contains("full moon"));
        assert!(render("Paris", test_date(), &day(0.9)).contains("waning crescent"));
    }

    #[test]
    fn table_has_one_row_per_hour_plus_frame() {
        let mut two_hours = day(0.5);
        two_hours.hours.push(hour());

        let out = render("Paris", test_date(), &two_hours);
        let data_rows = out.lines().filter(|line| line.contains("km/h")).count();

        assert_eq!(data_rows, 2);
        assert!(out.contains('┌') && out.contains('┼') && out.contains('┘'));
    }

    #[test]
    fn hour_cells_carry_units_and_direction() {
        let out = render("Paris", test_date(), &day(0.5));

        assert!(out.contains("21.3°C (feels like 21°C)"));
        assert!(out.contains("47.2%"));
        assert!(out.contains("12.6 km/h"));
        assert!(out.contains("20.5 km/h"));
        assert!(out.contains("24.1 km"));
        assert!(out.contains("0%, 0mm"));
        // 250° rounds to the west slice.
        assert!(out.contains(" W "));
    }

    #[test]
    fn cells_are_centered_within_their_width() {
        assert_eq!(center("N", 5), "  N  ");
        assert_eq!(center("NE", 5), " NE  ");
        assert_eq!(center("Clear", 8), " Clear  ");
    }

    #[test]
    fn oversized_cells_overflow_instead_of_truncating() {
        let mut long_conditions = day(0.5);
        long_conditions.hours[0].conditions =
            "Rain, Partially cloudy with patches of morning fog".to_string();

        let out = render("Paris", test_date(), &long_conditions);

        let border_width = out
            .lines()
            .find(|line| line.starts_with('┌'))
            .expect("top border present")
            .chars()
            .count();
        let row_width = out
            .lines()
            .find(|line| line.contains("km/h"))
            .expect("data row present")
            .chars()
            .count();

        assert!(out.contains("Rain, Partially cloudy with patches of morning fog"));
        assert!(row_width > border_width);
    }
}
