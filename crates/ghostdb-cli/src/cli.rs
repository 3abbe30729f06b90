//! Clap command tree definition.
//!
//! Exactly one of `--interactive` or `--script PATH` selects the driver mode;
//! `--debug` turns on the mutation trace.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};

use ghostdb_core::Config;

/// Build the CLI command tree.
pub fn build_cli() -> Command {
    Command::new("ghostdb")
        .about("In-memory DB CLI")
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .help("Run in interactive mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .value_name("PATH")
                .help("Path to script file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("mode")
                .args(["interactive", "script"])
                .required(true)
                .multiple(false),
        )
}

/// Where commands come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Standard input, no echo
    Interactive,
    /// A script file, each line echoed before it runs
    Script(PathBuf),
}

/// Resolved command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub debug: bool,
}

impl Options {
    /// Resolve parsed matches. The `mode` group guarantees one mode is set.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mode = match matches.get_one::<PathBuf>("script") {
            Some(path) => Mode::Script(path.clone()),
            None => Mode::Interactive,
        };
        Self {
            mode,
            debug: matches.get_flag("debug"),
        }
    }

    /// Session configuration for the selected mode.
    pub fn config(&self) -> Config {
        let config = match self.mode {
            Mode::Interactive => Config::interactive(),
            Mode::Script(_) => Config::script(),
        };
        config.with_trace(self.debug)
    }
}
