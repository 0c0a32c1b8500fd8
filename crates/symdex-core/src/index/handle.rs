//! Atomically replaceable index reference.

use crate::{Result, SymdexError};
use std::sync::{Arc, RwLock};
use tracing::debug;

use super::symbol_index::SymbolIndex;

/// Shared handle to the current index.
///
/// Readers take an `Arc` snapshot and query it without holding the lock.
/// A rebuilt index is swapped in with [`IndexHandle::replace`]; snapshots
/// taken earlier stay valid until dropped.
#[derive(Debug)]
pub struct IndexHandle {
    current: RwLock<Arc<SymbolIndex>>,
}

impl IndexHandle {
    pub fn new(index: SymbolIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Snapshot of the current index.
    pub fn current(&self) -> Result<Arc<SymbolIndex>> {
        let guard = self.current.read().map_err(|_| SymdexError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Swap in a new index, returning the previous one.
    pub fn replace(&self, index: SymbolIndex) -> Result<Arc<SymbolIndex>> {
        let next = Arc::new(index);
        let mut guard = self.current.write().map_err(|_| SymdexError::LockPoisoned)?;
        let previous = std::mem::replace(&mut *guard, next);
        debug!(
            "Replaced symbol index: {} -> {} records",
            previous.len(),
            guard.len()
        );
        Ok(previous)
    }
}
