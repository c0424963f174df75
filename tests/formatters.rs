#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempo::libs::formatter::{format_seconds, weekday_label};

    #[test]
    fn test_format_seconds_zero() {
        assert_eq!(format_seconds(0.0), "00:00:00");
    }

    #[test]
    fn test_format_seconds_hours_minutes_seconds() {
        assert_eq!(format_seconds(3661.0), "01:01:01");
        assert_eq!(format_seconds(59.0), "00:00:59");
        assert_eq!(format_seconds(3600.0), "01:00:00");
        assert_eq!(format_seconds(8.0 * 3600.0 + 45.0 * 60.0), "08:45:00");
    }

    #[test]
    fn test_format_seconds_rounds_to_nearest_second() {
        assert_eq!(format_seconds(89.6), "00:01:30");
        assert_eq!(format_seconds(89.4), "00:01:29");
    }

    #[test]
    fn test_format_seconds_clamps_negative_to_zero() {
        assert_eq!(format_seconds(-5.0), "00:00:00");
        assert_eq!(format_seconds(-0.4), "00:00:00");
    }

    #[test]
    fn test_format_seconds_large_totals() {
        assert_eq!(format_seconds(100.0 * 3600.0), "100:00:00");
    }

    #[test]
    fn test_weekday_label() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 23).unwrap();
        assert_eq!(weekday_label(monday), "Mon 23");
        let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(weekday_label(saturday), "Sat 07");
    }
}
