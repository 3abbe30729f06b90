//! Line protocol
//!
//! One command per line, whitespace-delimited, verb case-insensitive:
//!
//! ```text
//! SET k v | GET k | UNSET k | COUNTS v | FIND v | BEGIN | ROLLBACK | COMMIT | END
//! ```
//!
//! [`Command::parse`] checks verb and arity; the store is never invoked for a
//! malformed line. [`Reply`] renders a result exactly as the shell prints it.

use std::fmt;

use crate::error::{GhostError, GhostResult, NoTransaction};
use crate::observer::StoreObserver;
use crate::store::TransactionalStore;

/// Reply text for an absent key or an empty FIND.
pub const NULL: &str = "NULL";

/// A validated protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Unset { key: String },
    Counts { value: String },
    Find { value: String },
    Begin,
    Rollback,
    Commit,
    /// Stop reading commands
    End,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line and
    /// [`GhostError::InvalidCommand`] for an unknown verb or a wrong number
    /// of arguments.
    pub fn parse(line: &str) -> GhostResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let verb = match tokens.next() {
            Some(verb) => verb.to_ascii_uppercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = tokens.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("SET", [key, value]) => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            ("GET", [key]) => Command::Get { key: key.to_string() },
            ("UNSET", [key]) => Command::Unset { key: key.to_string() },
            ("COUNTS", [value]) => Command::Counts { value: value.to_string() },
            ("FIND", [value]) => Command::Find { value: value.to_string() },
            ("BEGIN", []) => Command::Begin,
            ("ROLLBACK", []) => Command::Rollback,
            ("COMMIT", []) => Command::Commit,
            ("END", []) => Command::End,
            _ => {
                return Err(GhostError::InvalidCommand {
                    line: line.trim().to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}

/// Result of one command, rendered by `Display` as protocol text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print
    Silent,
    /// GET hit
    Value(String),
    /// GET miss or FIND with no match
    Null,
    /// COUNTS result
    Count(usize),
    /// FIND result, never empty
    Keys(Vec<String>),
    NoTransaction,
    InvalidCommand,
    /// END was read; the driver stops
    End,
}

impl Reply {
    /// Whether the driver should print a line for this reply.
    pub fn is_printable(&self) -> bool {
        !matches!(self, Reply::Silent | Reply::End)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Silent | Reply::End => Ok(()),
            Reply::Value(value) => f.write_str(value),
            Reply::Null => f.write_str(NULL),
            Reply::Count(count) => write!(f, "{}", count),
            Reply::Keys(keys) => f.write_str(&keys.join(" ")),
            Reply::NoTransaction => write!(f, "{}", NoTransaction),
            Reply::InvalidCommand => f.write_str("INVALID COMMAND"),
        }
    }
}

impl From<Result<(), NoTransaction>> for Reply {
    fn from(result: Result<(), NoTransaction>) -> Self {
        match result {
            Ok(()) => Reply::Silent,
            Err(NoTransaction) => Reply::NoTransaction,
        }
    }
}

impl<O: StoreObserver> TransactionalStore<O> {
    /// Run one parsed command against the store.
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Set { key, value } => {
                self.set(&key, &value);
                Reply::Silent
            }
            Command::Get { key } => match self.get(&key) {
                Some(value) => Reply::Value(value.to_string()),
                None => Reply::Null,
            },
            Command::Unset { key } => {
                self.unset(&key);
                Reply::Silent
            }
            Command::Counts { value } => Reply::Count(self.count(&value)),
            Command::Find { value } => {
                let keys = self.find(&value);
                if keys.is_empty() {
                    Reply::Null
                } else {
                    Reply::Keys(keys)
                }
            }
            Command::Begin => {
                self.begin();
                Reply::Silent
            }
            Command::Rollback => self.rollback().into(),
            Command::Commit => self.commit().into(),
            Command::End => Reply::End,
        }
    }

    /// Parse and run one input line.
    pub fn process_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::Silent,
            Err(err) => {
                tracing::debug!(error = %err, line = line.trim(), "rejected input");
                Reply::InvalidCommand
            }
        }
    }
}
