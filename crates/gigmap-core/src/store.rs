//! Snapshot store — the single source of truth for the read interface.
//!
//! Readers never observe a half-built snapshot: [`SnapshotStore::publish`]
//! swaps an `Arc` under a write lock and [`SnapshotStore::current`] clones
//! the `Arc` under a read lock, so a query sees either the fully-previous or
//! the fully-new snapshot. The read interface reads from the store, never
//! from the feeds directly.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::error::PersistenceError;
use crate::types::Snapshot;

pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Start from the given snapshot — a restored one, or
    /// [`Snapshot::empty`] on first ever start.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The currently published snapshot. Cheap: clones the `Arc`, not the
    /// snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().expect("snapshot lock poisoned").clone()
    }

    /// Atomically replace the published snapshot.
    pub fn publish(&self, snapshot: Snapshot) {
        *self.current.write().expect("snapshot lock poisoned") = Arc::new(snapshot);
    }

    /// Load a previously persisted snapshot, or `None` when no file exists
    /// yet (first ever start).
    pub fn restore(path: &Path) -> Result<Option<Snapshot>, PersistenceError> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

impl Snapshot {
    /// Persist to disk as JSON. Best-effort: callers log the error and
    /// publish the in-memory snapshot regardless.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
