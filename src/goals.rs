use crate::errors::{Result, TrackerError};
use crate::models::UserGoal;
use crate::storage::{load_slot, save_slot, KeyValueStore, Slot};
use std::sync::Arc;
use tracing::info;

/// The single reduction goal of this installation.
#[derive(Clone)]
pub struct GoalRepository {
    store: Arc<dyn KeyValueStore>,
}

impl GoalRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replaces any previous goal. Rejects a blank description.
    pub fn save_goal(&self, goal: &UserGoal) -> Result<()> {
        if goal.description.trim().is_empty() {
            return Err(TrackerError::InvalidGoal("description must not be empty".into()));
        }
        save_slot(self.store.as_ref(), Slot::UserGoal, goal)?;
        info!("goal set: {:?} <= {}/day", goal.kind, goal.target_per_day);
        Ok(())
    }

    pub fn get_goal(&self) -> Option<UserGoal> {
        load_slot(self.store.as_ref(), Slot::UserGoal)
    }
}
