//! Tracing setup for Ezma
//!
//! Console logs follow the user's chosen level while the file under `logs/`
//! keeps everything from the last run.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::{EzmaError, Result};

/// Name of the per-run debug log inside the logs directory.
pub const LOG_FILE_NAME: &str = "ezma-last-run.log";

/// Initialize tracing with dual output: stderr console (user level) + file (full debug)
///
/// stdout is left to command output.
///
/// `RUST_LOG` overrides `console_level` for the console layer. The file at
/// `logs_dir/ezma-last-run.log` (default `./logs`) is truncated on each run.
///
/// Returns the path of the debug log file.
///
/// # Errors
/// - `EzmaError::Io` - Logs directory or log file could not be created
/// - `EzmaError::Tracing` - A global subscriber is already installed
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> Result<PathBuf> {
    let logs_path = logs_dir.unwrap_or_else(|| Path::new("logs"));
    create_dir_all(logs_path)?;

    let log_file_path = logs_path.join(LOG_FILE_NAME);
    let log_file = File::create(&log_file_path)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(log_file)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EzmaError::Tracing {
            reason: e.to_string(),
        })?;

    tracing::info!(
        "Tracing initialized: console={}, debug_file={}",
        console_level,
        log_file_path.display()
    );

    Ok(log_file_path)
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use ezma_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_levels_map_to_tracing_levels() {
        assert_eq!(CliLogLevel::Error.as_tracing_level(), Level::ERROR);
        assert_eq!(CliLogLevel::Warn.as_tracing_level(), Level::WARN);
        assert_eq!(CliLogLevel::Debug.as_tracing_level(), Level::DEBUG);
        assert_eq!(CliLogLevel::Trace.as_tracing_level(), Level::TRACE);
    }

    #[test]
    fn test_init_creates_log_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let logs_dir = dir.path().join("logs");

        let path = init_tracing(Level::WARN, Some(&logs_dir)).unwrap();
        assert_eq!(path, logs_dir.join(LOG_FILE_NAME));
        assert!(path.exists());

        let second = init_tracing(Level::WARN, Some(&logs_dir));
        assert!(matches!(second, Err(EzmaError::Tracing { .. })));
    }
}
