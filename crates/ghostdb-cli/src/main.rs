//! GhostDB CLI — line-oriented shell over the in-memory store.
//!
//! - **Interactive mode**: `ghostdb --interactive` reads commands from stdin
//! - **Script mode**: `ghostdb --script FILE` replays a file, echoing each line
//! - `--debug` traces every mutation to stderr

use std::io;
use std::process;

use ghostdb_cli::{build_cli, run_interactive, run_script, Mode, Options};
use ghostdb_core::{
    Config, GhostError, GhostResult, NoopObserver, StoreObserver, TracingObserver,
    TransactionalStore,
};

fn main() {
    let matches = build_cli().get_matches();
    let options = Options::from_matches(&matches);
    let config = options.config();

    init_tracing(config.trace_mutations);

    let result = if config.trace_mutations {
        run(&options.mode, &config, TracingObserver)
    } else {
        run(&options.mode, &config, NoopObserver)
    };

    match result {
        Ok(lines) => tracing::debug!(lines, "session finished"),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run<O: StoreObserver>(mode: &Mode, config: &Config, observer: O) -> GhostResult<usize> {
    config.validate().map_err(GhostError::InvalidConfig)?;
    let mut store = TransactionalStore::with_capacity_and_observer(config.initial_capacity, observer);

    match mode {
        Mode::Interactive => run_interactive(&mut store, config),
        Mode::Script(path) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_script(&mut store, path, &mut out, config)
        }
    }
}

/// Install the stderr subscriber: DEBUG when tracing mutations, WARN otherwise.
fn init_tracing(debug: bool) {
    let level = if debug { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
