//! Tracing setup.
//!
//! The widgets own the terminal, so log output goes to a file, never to
//! stdout or stderr. Without `--log-file` or `--debug` no subscriber is
//! installed and every event is discarded.
//!
//! Environment variables:
//!   RUST_LOG          # Log filter (default: info, or debug with --debug)
//!   TERMDIALOG_LOG    # Log file path, same as --log-file

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Logging options from the command line.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Explicit log file.
    pub file: Option<PathBuf>,
    /// Debug level, and log to the default file if none is given.
    pub debug: bool,
}

impl LogConfig {
    /// Where events should be written, if anywhere.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match (&self.file, self.debug) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => default_log_path(),
            (None, false) => None,
        }
    }
}

/// `<cache dir>/termdialog/termdialog.log`, if the platform has a cache dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("termdialog").join("termdialog.log"))
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log file in use, if any.
pub fn init_logging(config: &LogConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.resolved_path() else {
        return Ok(None);
    };

    let filter = if config.debug {
        // Debug mode: debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let file = open_log_file(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(Some(path))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_and_no_debug_means_no_logging() {
        let config = LogConfig::default();
        assert_eq!(config.resolved_path(), None);
        assert_eq!(init_logging(&config).unwrap(), None);
    }

    #[test]
    fn explicit_file_wins_over_debug_default() {
        let config = LogConfig {
            file: Some(PathBuf::from("/tmp/x.log")),
            debug: true,
        };
        assert_eq!(config.resolved_path(), Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn debug_alone_uses_default_path() {
        let config = LogConfig {
            file: None,
            debug: true,
        };
        assert_eq!(config.resolved_path(), default_log_path());
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("termdialog/termdialog.log"));
        }
    }

    #[test]
    fn open_log_file_creates_parents_and_appends() {
        use std::io::Write;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("app.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn init_logging_writes_events_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("termdialog.log");
        let config = LogConfig {
            file: Some(path.clone()),
            debug: false,
        };

        assert_eq!(init_logging(&config).unwrap(), Some(path.clone()));
        tracing::info!("hello from the log test");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("logging initialized"));
        assert!(content.contains("hello from the log test"));
    }
}
