//! TOML configuration schema types for cinema-session.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial file (or an empty one) is valid.
//! Path fields use an empty string to mean "use the built-in default".

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::xdg;
use crate::storage;
use crate::store::DEFAULT_VISITED_TABS_KEY;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [storage]
/// [fixtures]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Durable storage for the visited-tab set.
    pub storage: StorageConfig,
    /// Where seed collections come from.
    pub fixtures: FixturesConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// `[storage]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding storage files. Empty means `xdg::data_dir()`.
    pub dir: String,
    /// Key the visited-tab set is stored under.
    pub visited_tabs_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            visited_tabs_key: DEFAULT_VISITED_TABS_KEY.to_string(),
        }
    }
}

impl StorageConfig {
    /// Checks that the key can be stored by the file backend.
    pub fn validate_key(&self) -> Result<(), String> {
        if storage::is_valid_key(&self.visited_tabs_key) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be a plain name of ASCII letters, digits, '-', '_' or '.'",
                self.visited_tabs_key
            ))
        }
    }

    /// Resolved storage directory, with `~` expanded.
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(&self.dir)
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// `[fixtures]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON fixture file. Empty means the bundled demo fixtures.
    pub path: String,
}

impl FixturesConfig {
    /// Resolved fixture path, or `None` for the bundled set.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            None
        } else {
            Some(xdg::expand_tilde(&self.path))
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity used when `CINEMA_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
