use crate::clock::Clock;
use crate::dates::parse_date;
use crate::errors::Result;
use crate::storage::{save_slot, KeyValueStore, Slot};
use chrono::{Datelike, NaiveDate};
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::warn;

pub const QUOTES: [&str; 15] = [
    "Every cigarette you don't smoke is a victory!",
    "Your body is already thanking you for this choice!",
    "One day at a time, one breath at a time. You've got this!",
    "The best time to quit was yesterday. The second best time is now!",
    "You're not just quitting smoking, you're choosing life!",
    "Every craving you overcome makes you stronger!",
    "Your future self will thank you for this decision!",
    "Progress, not perfection. You're doing amazing!",
    "Think of all the money you're saving for better things!",
    "Your lungs are healing with every smoke-free hour!",
    "You're breaking free from addiction - that's heroic!",
    "Clean air tastes better than any cigarette!",
    "Your family believes in you, and so do I!",
    "Each day smoke-free is a gift to your future!",
    "You're proving to yourself that you can do anything!",
];

/// The quote of the day: day of year (1-based) modulo the table size.
pub fn daily_quote(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal() as usize % QUOTES.len()]
}

pub fn random_quote() -> &'static str {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}

/// Remembers the last day a motivation card was shown.
#[derive(Clone)]
pub struct MotivationRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl MotivationRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn todays_quote(&self) -> &'static str {
        daily_quote(self.clock.today())
    }

    pub fn set_last_motivation_date(&self, date: NaiveDate) -> Result<()> {
        save_slot(self.store.as_ref(), Slot::LastMotivationDate, &date)
    }

    /// Accepts the JSON-encoded date as well as a bare `YYYY-MM-DD` string.
    pub fn last_motivation_date(&self) -> Option<NaiveDate> {
        let bytes = self.store.read(Slot::LastMotivationDate.key())?;
        let date = serde_json::from_slice::<NaiveDate>(&bytes)
            .ok()
            .or_else(|| std::str::from_utf8(&bytes).ok().and_then(parse_date));
        if date.is_none() {
            warn!("discarding malformed data in {}", Slot::LastMotivationDate.key());
        }
        date
    }

    pub fn mark_shown_today(&self) -> Result<NaiveDate> {
        let today = self.clock.today();
        self.set_last_motivation_date(today)?;
        Ok(today)
    }

    pub fn shown_today(&self) -> bool {
        self.last_motivation_date() == Some(self.clock.today())
    }
}
