//! GhostDB shell — argument parsing and the interactive/script command loops.
//!
//! The binary in `main.rs` is a thin wrapper; everything here is generic over
//! readers and writers so the loops can be tested without a terminal.

pub mod cli;
pub mod repl;

pub use cli::{build_cli, Mode, Options};
pub use repl::{run_interactive, run_script, run_session, BANNER};
