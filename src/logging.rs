//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber. The TUI owns the terminal, so
//! while it runs logs only go to a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Map `-v` repetitions to a level: warn, info, debug, trace
#[must_use]
pub const fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// With `log_file`, logs are appended there. Without one, logs go to stderr
/// unless `terminal_owned` is set, in which case logging stays off.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is already installed.
pub fn init(verbose: u8, log_file: Option<&Path>, terminal_owned: bool) -> Result<()> {
    let level = level_from_verbosity(verbose);
    let builder = tracing_subscriber::fmt().with_max_level(level);

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        None if terminal_owned => {}
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
