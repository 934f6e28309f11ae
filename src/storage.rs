use crate::errors::{Result, TrackerError};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};
use tracing::{error, warn};

/// Named slots of the installation's durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    DailyEntries,
    UserGoal,
    LastMotivationDate,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::DailyEntries => "panda-quit-entries",
            Slot::UserGoal => "panda-quit-goal",
            Slot::LastMotivationDate => "panda-quit-last-motivation",
        }
    }
}

/// Raw byte storage keyed by slot name.
///
/// `read` never fails: anything that cannot be read is reported as absent.
/// `write` must be all-or-nothing so a failed save leaves the previous
/// payload intact.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Option<Vec<u8>>;

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// Decodes a slot, treating missing or malformed payloads as absent.
pub fn load_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, slot: Slot) -> Option<T> {
    let bytes = store.read(slot.key())?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("discarding malformed data in {}: {err}", slot.key());
            None
        }
    }
}

pub fn save_slot<T: Serialize + ?Sized>(store: &dyn KeyValueStore, slot: Slot, value: &T) -> Result<()> {
    let payload = serde_json::to_vec(value).map_err(|source| TrackerError::Encode {
        key: slot.key().to_string(),
        source,
    })?;
    store.write(slot.key(), &payload)
}

/// One JSON file per slot inside a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        match fs::read(self.slot_path(key)) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read {key}: {err}");
                None
            }
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let unavailable = |source| TrackerError::StorageUnavailable {
            key: key.to_string(),
            source,
        };

        // Atomic write
        let tmp_path = self.root.join(format!(".{key}.tmp"));
        fs::write(&tmp_path, bytes).map_err(unavailable)?;
        if let Err(err) = fs::rename(&tmp_path, self.slot_path(key)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(unavailable(err));
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores bytes without any encoding, e.g. to seed a corrupt payload.
    pub fn put_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), bytes.into());
        }
    }

    /// Makes every subsequent write fail with `StorageUnavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let unavailable = |message: &str| TrackerError::StorageUnavailable {
            key: key.to_string(),
            source: std::io::Error::other(message.to_string()),
        };

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(unavailable("simulated write error"));
        }
        let mut slots = self.slots.lock().map_err(|_| unavailable("store lock poisoned"))?;
        slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
