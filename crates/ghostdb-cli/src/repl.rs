//! Command loops.
//!
//! Interactive mode: greeting, then stdin line by line.
//! Script mode: a file line by line, each line echoed as `> line` first.
//! Both stop at `END` or end of input.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use ghostdb_core::{Config, GhostError, GhostResult, Reply, StoreObserver, TransactionalStore};

/// Greeting printed before an interactive session.
pub const BANNER: &str = "Interactive DB started. Type END or Ctrl+D/Z to exit.";

/// Run commands from `input` until `END` or end of input.
///
/// Returns the number of lines read, `END` included.
pub fn run_session<O, R, W>(
    store: &mut TransactionalStore<O>,
    mut input: R,
    out: &mut W,
    config: &Config,
) -> GhostResult<usize>
where
    O: StoreObserver,
    R: BufRead,
    W: Write,
{
    if config.show_banner {
        writeln!(out, "{}", BANNER)?;
        out.flush()?;
    }

    let mut buf = Vec::new();
    let mut processed = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        processed += 1;

        // A line that is not UTF-8 is bad input, not a broken channel.
        let reply = match std::str::from_utf8(&buf) {
            Ok(line) => {
                if config.echo_input {
                    writeln!(out, "> {}", line.trim())?;
                }
                store.process_line(line)
            }
            Err(e) => {
                if config.echo_input {
                    writeln!(out, "> {}", String::from_utf8_lossy(&buf).trim())?;
                }
                tracing::debug!(line = processed, error = %e, "undecodable input");
                Reply::InvalidCommand
            }
        };
        if reply == Reply::End {
            tracing::debug!(lines = processed, "END received");
            break;
        }
        if reply.is_printable() {
            writeln!(out, "{}", reply)?;
        }
        out.flush()?;
    }

    out.flush()?;
    Ok(processed)
}

/// Run the script at `path`.
///
/// A missing file is reported on `out` as `File not found: <path>` and ends
/// the mode without error. Any other failure to open the file is an error.
pub fn run_script<O, W>(
    store: &mut TransactionalStore<O>,
    path: &Path,
    out: &mut W,
    config: &Config,
) -> GhostResult<usize>
where
    O: StoreObserver,
    W: Write,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "script not found");
            writeln!(out, "File not found: {}", path.display())?;
            return Ok(0);
        }
        Err(e) => return Err(GhostError::io_at(path, e)),
    };

    tracing::info!(path = %path.display(), "running script");
    run_session(store, BufReader::new(file), out, config)
}

/// Run an interactive session on stdin/stdout.
pub fn run_interactive<O: StoreObserver>(
    store: &mut TransactionalStore<O>,
    config: &Config,
) -> GhostResult<usize> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(store, stdin.lock(), &mut out, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, config: &Config) -> (String, usize) {
        let mut store = TransactionalStore::new();
        let mut out = Vec::new();
        let n = run_session(&mut store, Cursor::new(input), &mut out, config).unwrap();
        (String::from_utf8(out).unwrap(), n)
    }

    #[test]
    fn test_interactive_prints_banner_and_replies() {
        let (out, n) = session("SET a 1\nGET a\nGET b\n", &Config::interactive());
        assert_eq!(out, format!("{}\n1\nNULL\n", BANNER));
        assert_eq!(n, 3);
    }

    #[test]
    fn test_script_echoes_lines() {
        let (out, _) = session("  set a 1 \nget a\n", &Config::script());
        assert_eq!(out, "> set a 1\n> get a\n1\n");
    }

    #[test]
    fn test_end_stops_loop() {
        let (out, n) = session("GET a\nEND\nGET a\n", &Config::script());
        assert_eq!(out, "> GET a\nNULL\n> END\n");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_blank_lines_are_silent() {
        let (out, n) = session("\n\n  \n", &Config::script());
        assert_eq!(out, "> \n> \n> \n");
        assert_eq!(n, 3);
    }

    #[test]
    fn test_invalid_command_continues() {
        let (out, _) = session("FROB\nSET a\nSET a 1\nGET a\n", &Config::script());
        let replies: Vec<&str> = out.lines().filter(|l| !l.starts_with('>')).collect();
        assert_eq!(replies, vec!["INVALID COMMAND", "INVALID COMMAND", "1"]);
    }

    #[test]
    fn test_undecodable_line_is_invalid_command() {
        let mut store = TransactionalStore::new();
        let mut out = Vec::new();
        let input: &[u8] = b"SET a 1\n\xff\xfe\nGET a";
        let n = run_session(&mut store, input, &mut out, &Config::interactive()).unwrap();
        assert_eq!(n, 3);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\nINVALID COMMAND\n1\n", BANNER));
    }

    #[test]
    fn test_missing_script_reports_and_returns() {
        let mut store = TransactionalStore::new();
        let mut out = Vec::new();
        let path = Path::new("/definitely/not/here/script.txt");
        let n = run_script(&mut store, path, &mut out, &Config::script()).unwrap();
        assert_eq!(n, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "File not found: /definitely/not/here/script.txt\n"
        );
    }
}
