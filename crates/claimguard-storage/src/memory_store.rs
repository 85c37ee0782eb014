use std::sync::Mutex;

use claimguard_core::errors::StorageError;
use claimguard_core::models::CoordinatorSnapshot;
use claimguard_core::traits::IStateStore;

/// Keeps the last snapshot in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<CoordinatorSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IStateStore for MemoryStore {
    fn load(&self) -> Result<Option<CoordinatorSnapshot>, StorageError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|_| StorageError::CorruptSnapshot {
                details: "memory store lock poisoned".to_string(),
            })
    }

    fn save(&self, snapshot: &CoordinatorSnapshot) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::CorruptSnapshot {
            details: "memory store lock poisoned".to_string(),
        })?;
        *slot = Some(snapshot.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
