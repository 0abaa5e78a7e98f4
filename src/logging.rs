//! File logging.
//!
//! The terminal is owned by the game screen, so `tracing` output goes to
//! `<config dir>/logs/apocalypse.log`. `RUST_LOG` takes precedence over the
//! level from the config file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Build the filter: `RUST_LOG` if set and valid, else `level`, else `info`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file. Returns the file path.
///
/// # Errors
///
/// Returns an error if the logs directory or file cannot be created.
pub fn init(config_dir: &Path, level: &str) -> Result<PathBuf> {
    let logs_dir = config_dir.join(constants::LOGS_DIR_NAME);
    fs::create_dir_all(&logs_dir)
        .wrap_err_with(|| format!("creating log directory {}", logs_dir.display()))?;

    let path = logs_dir.join(constants::LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    // A second init (tests, repeated runs in one process) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = init(dir.path(), "debug").unwrap();
        assert_eq!(
            path,
            dir.path()
                .join(constants::LOGS_DIR_NAME)
                .join(constants::LOG_FILE_NAME)
        );
        assert!(path.is_file());
    }

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on garbage directives.
        let _ = build_filter("=[not a directive");
    }
}
