//! Transactional store — the heart of GhostDB.
//!
//! TransactionalStore combines a record map, a value-count index and a stack
//! of undo frames.
//!
//! **Write path**: record the key's prior state in the innermost frame (first
//! touch only), then apply the write to the map and the index eagerly.
//! **Rollback**: pop one frame and restore each touched key through the raw
//! write/erase paths, which never record into outer frames.
//! **Commit**: drop the whole undo stack; the map already holds the values.

use hashbrown::HashMap;

use crate::error::NoTransaction;
use crate::index::ValueIndex;
use crate::observer::{NoopObserver, StoreObserver};

/// Undo information for one BEGIN: key → value before the frame first
/// touched it, `None` if the key did not exist.
type Frame = HashMap<String, Option<String>>;

/// In-memory key-value store with nested transactions.
///
/// Single owner, single writer. Wrap it in a [`SharedStore`](crate::SharedStore)
/// to share it between threads.
#[derive(Debug)]
pub struct TransactionalStore<O = NoopObserver> {
    /// Primary map
    records: HashMap<String, String>,
    /// value → number of keys holding it
    index: ValueIndex,
    /// Open transactions, innermost last
    frames: Vec<Frame>,
    /// Mutation hooks (debug trace)
    observer: O,
}

impl TransactionalStore {
    /// Create an empty store without an observer.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl Default for TransactionalStore {
    fn default() -> Self { Self::new() }
}

impl<O: StoreObserver> TransactionalStore<O> {
    /// Create an empty store reporting mutations to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self::with_capacity_and_observer(0, observer)
    }

    /// Create an empty store with room for `capacity` keys.
    pub fn with_capacity_and_observer(capacity: usize, observer: O) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
            index: ValueIndex::new(),
            frames: Vec::new(),
            observer,
        }
    }

    /// Current value of `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }

    /// Bind `key` to `value`, overwriting any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.record_undo(key);
        self.write(key, value);
    }

    /// Remove `key`. Removing an absent key is a no-op.
    pub fn unset(&mut self, key: &str) {
        self.record_undo(key);
        self.erase(key);
    }

    /// Number of keys currently holding `value`.
    pub fn count(&self, value: &str) -> usize {
        self.index.count(value)
    }

    /// Every key currently holding `value`, in ascending lexicographic order.
    pub fn find(&self, value: &str) -> Vec<String> {
        let mut keys: Vec<String> = self.records.iter()
            .filter(|(_, v)| v.as_str() == value)
            .map(|(k, _)| k.clone())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Open a (possibly nested) transaction.
    pub fn begin(&mut self) {
        self.frames.push(Frame::new());
        self.observer.on_begin(self.frames.len());
    }

    /// Undo every change made since the innermost BEGIN and close it.
    ///
    /// Fails with [`NoTransaction`] when nothing is open.
    pub fn rollback(&mut self) -> Result<(), NoTransaction> {
        let frame = self.frames.pop().ok_or(NoTransaction)?;
        for (key, prior) in frame {
            match prior {
                Some(value) => self.write(&key, &value),
                None => self.erase(&key),
            }
        }
        self.observer.on_rollback(self.frames.len());
        Ok(())
    }

    /// Make every open transaction permanent.
    ///
    /// Closes all nesting levels at once, not just the innermost. Fails with
    /// [`NoTransaction`] when nothing is open.
    pub fn commit(&mut self) -> Result<(), NoTransaction> {
        if self.frames.is_empty() {
            return Err(NoTransaction);
        }
        let discarded = self.frames.len();
        self.frames.clear();
        self.observer.on_commit(discarded);
        Ok(())
    }

    /// Number of open transactions.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if at least one transaction is open.
    pub fn in_transaction(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct values held by at least one key.
    pub fn distinct_values(&self) -> usize {
        self.index.len()
    }

    /// The attached observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Remember the pre-mutation state of `key` in the innermost frame,
    /// unless that frame already holds a snapshot for it.
    fn record_undo(&mut self, key: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.entry(key.to_owned())
                .or_insert_with(|| self.records.get(key).cloned());
        }
    }

    /// Raw write: map + index, no undo recording.
    fn write(&mut self, key: &str, value: &str) {
        if let Some(old) = self.records.insert(key.to_owned(), value.to_owned()) {
            self.index.decrement(&old);
        }
        self.index.increment(value);
        self.observer.on_set(key, value);
    }

    /// Raw erase: map + index, no undo recording.
    fn erase(&mut self, key: &str) {
        if let Some(old) = self.records.remove(key) {
            self.index.decrement(&old);
            self.observer.on_unset(key);
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_index_consistent(&self) {
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for value in self.records.values() {
            *expected.entry(value.as_str()).or_insert(0) += 1;
        }
        assert_eq!(self.index.len(), expected.len(), "index holds stale values");
        for (value, count) in self.index.iter() {
            assert_eq!(expected.get(value).copied(), Some(count), "count mismatch for {value:?}");
        }
    }
}
