use crate::clock::Clock;
use crate::dates::start_of_day;
use crate::errors::Result;
use crate::models::DailyEntry;
use crate::storage::{load_slot, save_slot, KeyValueStore, Slot};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::info;

/// Entries older than this many days (relative to the save) are pruned.
pub const RETENTION_DAYS: i64 = 30;
pub const WINDOW_DAYS: i64 = 7;

#[derive(Clone)]
pub struct EntryRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl EntryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Inserts or replaces the entry for `entry.date`, then applies retention.
    pub fn save_entry(&self, entry: DailyEntry) -> Result<()> {
        let mut entries = self.get_entries();
        match entries.iter_mut().find(|existing| existing.date == entry.date) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }

        // A day survives while its midnight is no earlier than the same
        // wall-clock time RETENTION_DAYS ago.
        let cutoff = self.clock.now().naive_local() - Duration::days(RETENTION_DAYS);
        let before = entries.len();
        entries.retain(|e| start_of_day(e.date) >= cutoff);
        if entries.len() < before {
            info!("pruned {} entries older than {cutoff}", before - entries.len());
        }

        save_slot(self.store.as_ref(), Slot::DailyEntries, &entries)
    }

    /// Stored order, not necessarily sorted by date.
    pub fn get_entries(&self) -> Vec<DailyEntry> {
        load_slot(self.store.as_ref(), Slot::DailyEntries).unwrap_or_default()
    }

    pub fn get_entry_by_date(&self, date: NaiveDate) -> Option<DailyEntry> {
        self.get_entries().into_iter().find(|e| e.date == date)
    }

    /// Today and the six days before it, oldest first, with zero placeholders
    /// for days that have nothing stored.
    pub fn get_last_7_days(&self) -> Vec<DailyEntry> {
        let entries = self.get_entries();
        let today = self.clock.today();

        (0..WINDOW_DAYS)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                entries
                    .iter()
                    .find(|e| e.date == date)
                    .cloned()
                    .unwrap_or_else(|| DailyEntry::placeholder(date))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::dates::format_date;
    use crate::errors::TrackerError;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn repo_with(store: Arc<MemoryStore>) -> EntryRepository {
        EntryRepository::new(store, Arc::new(FixedClock::on(today())))
    }

    fn entry(date: NaiveDate, cigarettes: u32, vapes: u32) -> DailyEntry {
        DailyEntry {
            date,
            cigarettes,
            vapes,
            recorded_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn saving_same_day_twice_keeps_latest() {
        let repo = repo_with(Arc::new(MemoryStore::new()));
        repo.save_entry(entry(today(), 5, 1)).unwrap();
        repo.save_entry(entry(today(), 2, 0)).unwrap();

        let entries = repo.get_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], entry(today(), 2, 0));
    }

    #[test]
    fn replace_preserves_order_of_others() {
        let repo = repo_with(Arc::new(MemoryStore::new()));
        let a = today() - Duration::days(2);
        let b = today() - Duration::days(1);
        repo.save_entry(entry(b, 1, 1)).unwrap();
        repo.save_entry(entry(a, 3, 0)).unwrap();
        repo.save_entry(entry(today(), 0, 0)).unwrap();
        repo.save_entry(entry(a, 4, 4)).unwrap();

        let dates: Vec<_> = repo.get_entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![b, a, today()]);
        assert_eq!(repo.get_entry_by_date(a).unwrap().cigarettes, 4);
    }

    #[test]
    fn save_prunes_entries_past_retention() {
        let store = Arc::new(MemoryStore::new());
        let old = entry(today() - Duration::days(35), 9, 9);
        let recent = entry(today() - Duration::days(10), 2, 0);
        let edge = entry(today() - Duration::days(30), 1, 0);
        let inside = entry(today() - Duration::days(29), 1, 1);
        save_slot(
            store.as_ref(),
            Slot::DailyEntries,
            &vec![old, recent.clone(), edge, inside.clone()],
        )
        .unwrap();

        let repo = repo_with(store);
        let fresh = entry(today(), 1, 1);
        repo.save_entry(fresh.clone()).unwrap();

        assert_eq!(repo.get_entries(), vec![recent, inside, fresh]);
    }

    #[test]
    fn thirty_day_old_entry_survives_a_save_at_midnight() {
        let store = Arc::new(MemoryStore::new());
        let edge = entry(today() - Duration::days(30), 1, 0);
        save_slot(store.as_ref(), Slot::DailyEntries, &vec![edge.clone()]).unwrap();

        let midnight = Local
            .from_local_datetime(&start_of_day(today()))
            .earliest()
            .unwrap();
        let midnight = FixedClock::new(midnight);
        let repo = EntryRepository::new(store, Arc::new(midnight));
        repo.save_entry(entry(today(), 0, 0)).unwrap();

        assert_eq!(repo.get_entries()[0], edge);
    }

    #[test]
    fn window_always_has_seven_days_oldest_first() {
        let repo = repo_with(Arc::new(MemoryStore::new()));
        repo.save_entry(entry(today() - Duration::days(3), 4, 1)).unwrap();

        let window = repo.get_last_7_days();
        assert_eq!(window.len(), 7);
        assert_eq!(window[0].date, today() - Duration::days(6));
        assert_eq!(window[6].date, today());
        assert_eq!(window[3].total(), 5);
        assert_eq!(window[6], DailyEntry::placeholder(today()));
    }

    #[test]
    fn window_ignores_entries_outside_range() {
        let repo = repo_with(Arc::new(MemoryStore::new()));
        repo.save_entry(entry(today() - Duration::days(7), 8, 0)).unwrap();

        let window = repo.get_last_7_days();
        assert!(window.iter().all(|e| e.total() == 0));
    }

    #[test]
    fn saved_entry_is_found_by_today_key() {
        let repo = repo_with(Arc::new(MemoryStore::new()));
        let saved = entry(today(), 3, 2);
        repo.save_entry(saved.clone()).unwrap();

        let key = format_date(today());
        let date = crate::dates::parse_date(&key).unwrap();
        assert_eq!(repo.get_entry_by_date(date), Some(saved));
    }

    #[test]
    fn unparseable_payload_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.put_raw(Slot::DailyEntries.key(), "[{\"date\":");
        let repo = repo_with(store.clone());
        assert!(repo.get_entries().is_empty());
        assert_eq!(repo.get_entry_by_date(today()), None);

        repo.save_entry(entry(today(), 1, 0)).unwrap();
        assert_eq!(repo.get_entries().len(), 1);
    }

    #[test]
    fn failed_save_leaves_previous_entries() {
        let store = Arc::new(MemoryStore::new());
        let repo = repo_with(store.clone());
        repo.save_entry(entry(today(), 1, 0)).unwrap();

        store.set_fail_writes(true);
        let err = repo.save_entry(entry(today(), 7, 7)).unwrap_err();
        assert!(matches!(err, TrackerError::StorageUnavailable { .. }));
        assert_eq!(repo.get_entries(), vec![entry(today(), 1, 0)]);
    }
}
