//! Timestamp parsing/formatting and calendar windows used by reservations
//! and sales reports.
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical on-disk layout. Sub-second precision is only written when present.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Date layout used in the sales report logs, month and day without padding
pub const REPORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    // Layouts written by older installs and typed at the reservation form
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %I:%M:%S %p",
    "%m-%d-%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Parse a timestamp in any of the accepted layouts. Bare dates map to midnight.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(STORAGE_FORMAT).to_string()
}

/// Midnight of the Monday on or before `reference`
pub fn start_of_week(reference: NaiveDateTime) -> NaiveDateTime {
    let date = reference.date();
    let days_since_monday = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(days_since_monday))
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Midnight of the first day of `reference`'s month
pub fn start_of_month(reference: NaiveDateTime) -> NaiveDateTime {
    let date = reference.date();
    date.checked_sub_signed(Duration::days(i64::from(date.day0())))
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

pub fn add_days(timestamp: NaiveDateTime, days: i64) -> NaiveDateTime {
    timestamp
        .checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDateTime::MAX)
}

pub fn add_one_month(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDateTime::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_iso_layouts() {
        let expected = datetime(2024, 6, 3, 9, 30);
        assert_eq!(parse_timestamp("2024-06-03T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-03 09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-03T09:30"), Some(expected));
        assert_eq!(parse_timestamp("  2024-06-03 09:30  "), Some(expected));
    }

    #[test]
    fn test_parse_legacy_layouts() {
        let expected = datetime(2024, 6, 3, 21, 15);
        assert_eq!(parse_timestamp("06-03-2024 09:15 PM"), Some(expected));
        assert_eq!(parse_timestamp("6/3/2024 9:15:00 PM"), Some(expected));
        assert_eq!(parse_timestamp("06/03/2024 21:15"), Some(expected));
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        assert_eq!(parse_timestamp("2024-06-03"), Some(datetime(2024, 6, 3, 0, 0)));
        assert_eq!(parse_timestamp("06/03/2024"), Some(datetime(2024, 6, 3, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp("2024-13-45T99:99:99"), None);
    }

    #[test]
    fn test_format_round_trips() {
        let original = datetime(2024, 2, 29, 23, 59);
        let formatted = format_timestamp(&original);
        assert_eq!(formatted, "2024-02-29T23:59:00");
        assert_eq!(parse_timestamp(&formatted), Some(original));
    }

    #[test]
    fn test_start_of_week() {
        // Wednesday -> Monday
        assert_eq!(start_of_week(datetime(2024, 6, 5, 14, 0)), datetime(2024, 6, 3, 0, 0));
        // Monday stays on the same day
        assert_eq!(start_of_week(datetime(2024, 6, 3, 8, 0)), datetime(2024, 6, 3, 0, 0));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(start_of_week(datetime(2024, 6, 9, 23, 0)), datetime(2024, 6, 3, 0, 0));
    }

    #[test]
    fn test_month_window_crosses_year() {
        let start = start_of_month(datetime(2024, 12, 17, 10, 0));
        assert_eq!(start, datetime(2024, 12, 1, 0, 0));
        assert_eq!(add_one_month(start), datetime(2025, 1, 1, 0, 0));
    }
}
