//! Thread-safe handle over a single store.
//!
//! Every call takes one exclusive lock for its whole duration, so callers on
//! different threads are serialised and behave as one logical writer. There is
//! no isolation between callers: a transaction opened through one clone is
//! visible to, and can be closed by, every other clone.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::{Command, Reply};
use crate::observer::{NoopObserver, StoreObserver};
use crate::store::TransactionalStore;

/// Cloneable, lock-protected [`TransactionalStore`].
pub struct SharedStore<O = NoopObserver> {
    inner: Arc<Mutex<TransactionalStore<O>>>,
}

impl<O: StoreObserver> SharedStore<O> {
    /// Take ownership of `store`.
    pub fn new(store: TransactionalStore<O>) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    /// Parse and run one protocol line under the lock.
    pub fn process_line(&self, line: &str) -> Reply {
        self.inner.lock().process_line(line)
    }

    /// Run one parsed command under the lock.
    pub fn execute(&self, command: Command) -> Reply {
        self.inner.lock().execute(command)
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// Use this to group several operations atomically with respect to other
    /// clones.
    pub fn with<R>(&self, f: impl FnOnce(&mut TransactionalStore<O>) -> R) -> R {
        let mut store = self.inner.lock();
        f(&mut store)
    }
}

impl<O> Clone for SharedStore<O> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl Default for SharedStore {
    fn default() -> Self { Self::new(TransactionalStore::new()) }
}
