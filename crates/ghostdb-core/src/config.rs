//! Configuration management for GhostDB sessions
//!
//! Provides presets for the two driver modes and validation for custom
//! configurations.

/// Upper bound for `initial_capacity` (keys pre-allocated in the record map)
pub const MAX_INITIAL_CAPACITY: usize = 16 * 1024 * 1024;

/// Session configuration with mode presets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Echo each input line as `> line` before executing it
    pub echo_input: bool,
    /// Emit a debug trace of every mutation
    pub trace_mutations: bool,
    /// Print the greeting before reading commands
    pub show_banner: bool,
    /// Keys to pre-allocate in the record map
    pub initial_capacity: usize,
}

impl Config {
    /// Interactive shell: greeting, no echo.
    pub fn interactive() -> Self {
        Self {
            echo_input: false,
            trace_mutations: false,
            show_banner: true,
            initial_capacity: 0,
        }
    }

    /// Script replay: echo every line, no greeting.
    pub fn script() -> Self {
        Self {
            echo_input: true,
            trace_mutations: false,
            show_banner: false,
            initial_capacity: 0,
        }
    }

    /// Enable or disable the mutation trace.
    pub fn with_trace(mut self, trace_mutations: bool) -> Self {
        self.trace_mutations = trace_mutations;
        self
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(format!(
                "initial_capacity must be <= {}, got {}",
                MAX_INITIAL_CAPACITY, self.initial_capacity
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self { Self::interactive() }
}
