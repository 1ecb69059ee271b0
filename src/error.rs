//! Error types for cinema-session
//!
//! Business-rule rejections (duplicate watchlist entries, cancelling a
//! cancelled booking, unknown ids) are not errors; they are reported through
//! return values on the store. The enums here cover I/O and input shape.

use std::path::PathBuf;
use thiserror::Error;

/// Durable key-value storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading a key
    #[error("Failed to read storage key '{key}'")]
    Read {
        /// Storage key being read
        key: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a key
    #[error("Failed to write storage key '{key}': {message}")]
    Write {
        /// Storage key being written
        key: String,
        /// Description of the failing step
        message: String,
    },

    /// Failed to remove a key
    #[error("Failed to remove storage key '{key}'")]
    Remove {
        /// Storage key being removed
        key: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Backend refused the operation outright
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Fixture loading errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// I/O error reading the fixture file
    #[error("Failed to read fixtures: {path}")]
    Read {
        /// Fixture file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fixture JSON did not match the expected shape
    #[error("Failed to parse fixtures: {0}")]
    Parse(String),
}

/// Session store input errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Tab identifiers must be non-empty
    #[error("Tab id must not be empty")]
    EmptyTabId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_write_error_display() {
        let err = StorageError::Write {
            key: "visitedTabs".to_string(),
            message: "quota exceeded".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("visitedTabs"), "Error should contain key");
        assert!(
            display.contains("quota exceeded"),
            "Error should contain failure detail"
        );
    }

    #[test]
    fn test_storage_read_error_chains_source() {
        let err = StorageError::Read {
            key: "visitedTabs".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_fixture_read_error_display() {
        let err = FixtureError::Read {
            path: PathBuf::from("/srv/fixtures.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/srv/fixtures.json"));
    }

    #[test]
    fn test_empty_tab_display() {
        assert!(StoreError::EmptyTabId.to_string().contains("empty"));
    }
}
