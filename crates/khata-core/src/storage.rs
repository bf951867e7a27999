//! Persistence abstraction for the record slot.

use std::sync::{Arc, Mutex};

use khata_domain::Transaction;

use crate::error::{CoreError, CoreResult};

/// Abstraction over backends holding the single persisted record slot.
///
/// `load` is lenient by contract: a missing or undecodable slot yields an
/// empty list, never an error. Errors are reserved for faults the caller can
/// act on, such as a failed write.
pub trait SlotStorage: Send + Sync {
    fn save(&self, records: &[Transaction]) -> CoreResult<()>;
    fn load(&self) -> CoreResult<Vec<Transaction>>;
}

/// Volatile backend for tests and ephemeral embedders. Clones share the
/// same slot, so one handle can observe what a store persisted through
/// another.
#[derive(Clone, Default)]
pub struct MemorySlotStorage {
    slot: Arc<Mutex<Vec<Transaction>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with pre-existing records, as if a previous process
    /// had saved them.
    pub fn with_records(records: Vec<Transaction>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(records)),
        }
    }

    /// Copy of the slot contents as they would land on disk.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.slot.lock().map(|slot| slot.clone()).unwrap_or_default()
    }
}

impl SlotStorage for MemorySlotStorage {
    fn save(&self, records: &[Transaction]) -> CoreResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| CoreError::Storage("record slot mutex poisoned".into()))?;
        *slot = records.to_vec();
        Ok(())
    }

    fn load(&self) -> CoreResult<Vec<Transaction>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| CoreError::Storage("record slot mutex poisoned".into()))?;
        Ok(slot.clone())
    }
}
