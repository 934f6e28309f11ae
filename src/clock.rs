use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// Source of "now" for everything that depends on the current day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Local calendar day of `now`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// Pins the clock to local noon of `date`.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&noon));
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.timestamp_millis(), clock.now().timestamp_millis());
    }
}
