//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and a
//! function to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# cinema-session configuration
#
# All values shown below are the built-in defaults.
# Location: $XDG_CONFIG_HOME/cinema-session/config.toml

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Directory for durable session state (the visited-tab set).
# Empty means $XDG_DATA_HOME/cinema-session.
dir = ""

# Key the visited-tab set is stored under.
visited_tabs_key = "visitedTabs"

# ==============================================================================
# Fixtures
# ==============================================================================

[fixtures]

# JSON file with notifications, movieNotifications, watchlist and bookings.
# Empty means the bundled demo fixtures.
path = ""

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Used when CINEMA_LOG is unset.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"
"#;

/// Creates (or force-overwrites) the default config file at `xdg::config_path()`.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_config_at(&path, force)?;
    Ok(path)
}

/// Writes the default template to `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_template(path)
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(write_err)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
