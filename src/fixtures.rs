//! Seed collections injected into the session store at construction.
//!
//! Fixtures are trusted input: beyond deserializing into the entity types,
//! nothing here validates them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FixtureError;
use crate::model::{Booking, NotificationEntry, WatchlistItem};

/// Demo fixture set shipped with the crate.
const DEMO_FIXTURES: &str = include_str!("../fixtures/demo.json");

/// The four initial collections a session starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixtures {
    /// Generic notification feed.
    pub notifications: Vec<NotificationEntry>,
    /// Movie-release notification feed.
    pub movie_notifications: Vec<NotificationEntry>,
    /// Saved movies.
    pub watchlist: Vec<WatchlistItem>,
    /// Bookings in any status.
    pub bookings: Vec<Booking>,
}

impl Fixtures {
    /// Load fixtures from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|e| FixtureError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fixtures = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded fixtures from {}: {} notifications, {} movie notifications, {} watchlist items, {} bookings",
            path.display(),
            fixtures.notifications.len(),
            fixtures.movie_notifications.len(),
            fixtures.watchlist.len(),
            fixtures.bookings.len()
        );
        Ok(fixtures)
    }

    /// Parse fixtures from a JSON string. Missing collections are empty.
    pub fn from_json(content: &str) -> Result<Self, FixtureError> {
        serde_json::from_str(content).map_err(|e| FixtureError::Parse(e.to_string()))
    }

    /// The bundled demo set used when no fixture file is configured.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_json(DEMO_FIXTURES)
    }
}
