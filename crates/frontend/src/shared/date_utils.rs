//! Date and time formatting and date-range filters

use chrono::{DateTime, NaiveDate, Utc};

/// `2024-03-15 14:02`; empty for a missing timestamp
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// `2024-03-15`; empty for a missing timestamp
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the value of an `<input type="date">`; blank or invalid is `None`
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Inclusive day range test. Without any bound everything matches; with a
/// bound a record lacking a timestamp does not.
pub fn in_date_range(
    value: Option<&DateTime<Utc>>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(day) = value.map(|dt| dt.date_naive()) else {
        return false;
    };
    from.map_or(true, |from| day >= from) && to.map_or(true, |to| day <= to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format() {
        let dt = at(2024, 3, 15);
        assert_eq!(format_datetime(Some(&dt)), "2024-03-15 14:02");
        assert_eq!(format_date(Some(&dt)), "2024-03-15");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15.03.2024"), None);
    }

    #[test]
    fn test_in_date_range_is_inclusive() {
        let dt = at(2024, 3, 15);
        let day = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert!(in_date_range(Some(&dt), day, day));
        assert!(!in_date_range(Some(&dt), NaiveDate::from_ymd_opt(2024, 3, 16), None));
        assert!(in_date_range(None, None, None));
        assert!(!in_date_range(None, day, None));
    }
}
