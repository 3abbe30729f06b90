//! Store observers
//!
//! Hooks fired by [`TransactionalStore`](crate::TransactionalStore) after each
//! state change. The debug trace of the CLI is a [`TracingObserver`]; the
//! default [`NoopObserver`] compiles away.
//!
//! Write and erase hooks fire from the raw mutation paths, so the values
//! restored by a rollback are reported just like direct writes.

/// Receives notifications of store mutations.
///
/// Every hook has an empty default body.
pub trait StoreObserver {
    /// `key` now holds `value`.
    fn on_set(&self, _key: &str, _value: &str) {}

    /// `key` was removed. Not fired when the key was already absent.
    fn on_unset(&self, _key: &str) {}

    /// A transaction was opened; `depth` is the new nesting depth.
    fn on_begin(&self, _depth: usize) {}

    /// The innermost transaction was undone; `depth` is the remaining depth.
    fn on_rollback(&self, _depth: usize) {}

    /// All open transactions were made permanent.
    fn on_commit(&self, _discarded_frames: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {}

/// Emits one `tracing` DEBUG event per mutation under the `ghostdb::trace` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn on_set(&self, key: &str, value: &str) {
        tracing::debug!(target: "ghostdb::trace", "SET {} = {}", key, value);
    }

    fn on_unset(&self, key: &str) {
        tracing::debug!(target: "ghostdb::trace", "UNSET {}", key);
    }

    fn on_begin(&self, depth: usize) {
        tracing::debug!(target: "ghostdb::trace", depth, "BEGIN");
    }

    fn on_rollback(&self, depth: usize) {
        tracing::debug!(target: "ghostdb::trace", depth, "ROLLBACK");
    }

    fn on_commit(&self, discarded_frames: usize) {
        tracing::debug!(target: "ghostdb::trace", discarded_frames, "COMMIT");
    }
}

impl<O: StoreObserver + ?Sized> StoreObserver for &O {
    fn on_set(&self, key: &str, value: &str) {
        (**self).on_set(key, value)
    }

    fn on_unset(&self, key: &str) {
        (**self).on_unset(key)
    }

    fn on_begin(&self, depth: usize) {
        (**self).on_begin(depth)
    }

    fn on_rollback(&self, depth: usize) {
        (**self).on_rollback(depth)
    }

    fn on_commit(&self, discarded_frames: usize) {
        (**self).on_commit(discarded_frames)
    }
}
