use crate::clock::Clock;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key for a local calendar day.
pub fn format_date(date: NaiveDate) -> String {
    date.format(KEY_FORMAT).to_string()
}

pub fn parse_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), KEY_FORMAT).ok()
}

/// Long form for headings, e.g. "Monday, January 5, 2025".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Wall-clock midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn is_today(key: &str, clock: &dyn Clock) -> bool {
    key == format_date(clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn keys_are_zero_padded() {
        assert_eq!(format_date(day(2025, 1, 5)), "2025-01-05");
        assert_eq!(parse_date("2025-01-05"), Some(day(2025, 1, 5)));
        assert_eq!(parse_date("2025-13-05"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn late_evening_stays_on_local_day() {
        let late = Local
            .with_ymd_and_hms(2025, 1, 5, 23, 59, 30)
            .earliest()
            .unwrap();
        let clock = FixedClock::new(late);
        assert_eq!(format_date(clock.today()), "2025-01-05");
        assert!(is_today("2025-01-05", &clock));
        assert!(!is_today("2025-01-06", &clock));
    }

    #[test]
    fn start_of_day_is_local_midnight() {
        let start = start_of_day(day(2025, 3, 15));
        assert_eq!(start.date(), day(2025, 3, 15));
        assert_eq!(start.time(), NaiveTime::MIN);
    }

    #[test]
    fn display_names() {
        assert_eq!(format_display_date(day(2025, 1, 5)), "Sunday, January 5, 2025");
        assert_eq!(day_name(day(2025, 1, 6)), "Mon");
    }
}
