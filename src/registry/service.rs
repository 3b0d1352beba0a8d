//! Process-wide directory of live workers.

use crate::registry::domain::{TabId, Worker, WorkerKey, WorkerName};
use crate::registry::error::{WorkerRegistryError, WorkerRegistryResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe directory mapping worker addresses to live workers.
///
/// The registry holds at most one worker per `(name, tab)` address:
/// re-registration replaces the prior entry, mirroring a page that
/// navigated and re-attached its scripts. Entries are removed when the
/// external tab-lifecycle collaborator reports teardown.
#[derive(Debug, Default)]
pub struct WorkerRegistry {
    state: RwLock<HashMap<WorkerKey, Worker>>,
}

impl WorkerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a worker, replacing any prior entry at the same address.
    ///
    /// Returns the replaced worker when one existed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerRegistryError::LockPoisoned`] when registry state
    /// is poisoned.
    pub fn register(&self, worker: Worker) -> WorkerRegistryResult<Option<Worker>> {
        let mut state = self
            .state
            .write()
            .map_err(|_| WorkerRegistryError::LockPoisoned)?;
        Ok(state.insert(worker.key(), worker))
    }

    /// Looks up the live worker at an address.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerRegistryError::NotFound`] when no live worker
    /// matches, or [`WorkerRegistryError::LockPoisoned`] when registry
    /// state is poisoned.
    pub fn get(&self, name: WorkerName, tab_id: TabId) -> WorkerRegistryResult<Worker> {
        let key = WorkerKey::new(name, tab_id);
        let state = self
            .state
            .read()
            .map_err(|_| WorkerRegistryError::LockPoisoned)?;
        state
            .get(&key)
            .cloned()
            .ok_or(WorkerRegistryError::NotFound(key))
    }

    /// Removes the worker at an address. Idempotent: removing an absent
    /// entry is not an error.
    ///
    /// Returns the removed worker when one existed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerRegistryError::LockPoisoned`] when registry state
    /// is poisoned.
    pub fn unregister(&self, name: WorkerName, tab_id: TabId) -> WorkerRegistryResult<Option<Worker>> {
        let mut state = self
            .state
            .write()
            .map_err(|_| WorkerRegistryError::LockPoisoned)?;
        Ok(state.remove(&WorkerKey::new(name, tab_id)))
    }

    /// Removes every worker attached to a tab, returning the removed
    /// entries. Used when the tab-lifecycle collaborator reports that the
    /// tab closed or navigated away.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerRegistryError::LockPoisoned`] when registry state
    /// is poisoned.
    pub fn unregister_tab(&self, tab_id: TabId) -> WorkerRegistryResult<Vec<Worker>> {
        let mut state = self
            .state
            .write()
            .map_err(|_| WorkerRegistryError::LockPoisoned)?;
        let keys: Vec<WorkerKey> = state
            .keys()
            .filter(|key| key.tab_id == tab_id)
            .copied()
            .collect();
        let mut removed = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(worker) = state.remove(&key) {
                removed.push(worker);
            }
        }
        Ok(removed)
    }

    /// Returns the number of live workers.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerRegistryError::LockPoisoned`] when registry state
    /// is poisoned.
    pub fn len(&self) -> WorkerRegistryResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|_| WorkerRegistryError::LockPoisoned)?;
        Ok(state.len())
    }

    /// Returns whether no workers are registered.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerRegistryError::LockPoisoned`] when registry state
    /// is poisoned.
    pub fn is_empty(&self) -> WorkerRegistryResult<bool> {
        Ok(self.len()? == 0)
    }
}
