//! GhostDB Core — In-Memory Transactional Key-Value Store
//!
//! A string key-value store driven by a line protocol, with nested
//! transactions and a secondary index counting how many keys hold each value.
//!
//! # Architecture
//!
//! - **Store**: record map + value-count index + stack of undo frames
//! - **Writes**: applied eagerly; the innermost open frame remembers each
//!   key's state before its first touch
//! - **Rollback**: undoes one frame; **Commit**: drops every frame
//! - **Observers**: optional hooks (debug trace) around the one store
//!
//! # Example
//!
//! ```rust
//! use ghostdb_core::{Reply, TransactionalStore};
//!
//! let mut store = TransactionalStore::new();
//! store.process_line("SET a 10");
//! store.process_line("BEGIN");
//! store.process_line("SET a 30");
//! store.process_line("ROLLBACK");
//! assert_eq!(store.process_line("GET a"), Reply::Value("10".into()));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod index;
pub mod observer;
pub mod shared;
pub mod store;

// Re-export key types for convenience
pub use command::{Command, Reply, NULL};
pub use config::Config;
pub use error::{GhostError, GhostResult, NoTransaction};
pub use index::ValueIndex;
pub use observer::{NoopObserver, StoreObserver, TracingObserver};
pub use shared::SharedStore;
pub use store::TransactionalStore;
