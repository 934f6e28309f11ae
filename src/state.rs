use crate::clock::Clock;
use crate::entries::EntryRepository;
use crate::goals::GoalRepository;
use crate::motivation::MotivationRepository;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub entries: EntryRepository,
    pub goals: GoalRepository,
    pub motivation: MotivationRepository,
    pub clock: Arc<dyn Clock>,
    /// Held for the whole of each read-modify-write against the store.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: EntryRepository::new(store.clone(), clock.clone()),
            goals: GoalRepository::new(store.clone()),
            motivation: MotivationRepository::new(store, clock.clone()),
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
