#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, Local, NaiveDate, Timelike, Weekday};
    use dewit::libs::date_parser::{parse, parse_relative_to, parse_timestamp};
    use dewit::libs::error::DewitError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_and_yesterday() {
        let today = date(2026, 2, 19);
        assert_eq!(parse_relative_to("today", today).unwrap(), today);
        assert_eq!(parse_relative_to("Yesterday", today).unwrap(), date(2026, 2, 18));
    }

    #[test]
    fn test_full_iso_date() {
        let parsed = parse("2026-01-15").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2026, 1, 15));
    }

    #[test]
    fn test_month_day_uses_current_year() {
        let today = date(2026, 2, 19);
        assert_eq!(parse_relative_to("01-15", today).unwrap(), date(2026, 1, 15));
    }

    #[test]
    fn test_last_weekday() {
        // 2026-02-19 is a Thursday
        let today = date(2026, 2, 19);
        assert_eq!(today.weekday(), Weekday::Thu);
        assert_eq!(parse_relative_to("last monday", today).unwrap(), date(2026, 2, 16));
        assert_eq!(parse_relative_to("last friday", today).unwrap(), date(2026, 2, 13));
    }

    #[test]
    fn test_last_same_weekday_goes_back_a_week() {
        let today = date(2026, 2, 19);
        assert_eq!(parse_relative_to("last thursday", today).unwrap(), date(2026, 2, 12));
    }

    #[test]
    fn test_future_date_is_rejected() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let err = parse(&tomorrow.format("%Y-%m-%d").to_string()).unwrap_err();
        assert!(matches!(err, DewitError::InvalidInput(_)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(parse("someday").unwrap_err(), DewitError::InvalidInput(_)));
        assert!(matches!(parse("last funday").unwrap_err(), DewitError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let with_time = parse_timestamp("2026-02-19 14:30").unwrap();
        assert_eq!((with_time.hour(), with_time.minute()), (14, 30));

        let iso = parse_timestamp("2026-02-19T08:15:00").unwrap();
        assert_eq!(iso.date(), date(2026, 2, 19));
        assert_eq!(iso.hour(), 8);

        let bare = parse_timestamp("2026-02-19").unwrap();
        assert_eq!(bare, date(2026, 2, 19).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(parse_timestamp("not a time").unwrap_err(), DewitError::InvalidInput(_)));
    }
}
