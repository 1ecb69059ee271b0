//! Cinema session state library
//!
//! This crate provides the session-scoped state behind a cinema ticketing
//! front end: notification read-state, the watchlist, booking statuses and
//! the set of visited tabs, with badge counts derived from all of them.
//!
//! The [`SessionStore`] is constructed explicitly from [`Fixtures`] and a
//! [`KeyValueStorage`] backend and passed to whoever needs it. Only the
//! visited-tab set is written to storage; everything else starts again from
//! fixtures in each session.
//!
//! # Example
//!
//! ```
//! use cinema_session::{CancelOutcome, Fixtures, MemoryStorage, SessionStore};
//!
//! let fixtures = Fixtures::demo().expect("bundled fixtures parse");
//! let mut store = SessionStore::open(fixtures, Box::new(MemoryStorage::new()), "visitedTabs");
//!
//! assert_eq!(store.badges().notifications, 3);
//! assert_eq!(store.cancel_booking("b1"), CancelOutcome::Cancelled);
//! assert_eq!(store.badges().cancelled_bookings, 2);
//! ```

#![warn(missing_docs)]

/// Configuration file loading, schema and paths.
pub mod config;

/// Error types for storage, fixtures and store input.
pub mod error;

/// Seed collections.
pub mod fixtures;

/// Tracing subscriber setup for the binary.
pub mod logging;

/// Entity types.
pub mod model;

/// Read-only views for consumers.
pub mod snapshot;

/// Durable key-value storage backends.
pub mod storage;

/// The session state store.
pub mod store;

/// Well-known tab identifiers.
pub mod tabs;

pub use error::{FixtureError, StorageError, StoreError};
pub use fixtures::Fixtures;
pub use model::{
    Booking, BookingStatus, NotificationEntry, WatchlistItem, WatchlistStatus,
};
pub use snapshot::{Badges, SessionSnapshot};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CancelOutcome, Hydration, SessionStore};

use config::schema::Config;

/// Opens a session as configured: fixtures from the configured file (or the
/// bundled demo set) and visited tabs from file storage.
pub fn open_session(config: &Config) -> Result<SessionStore, FixtureError> {
    let fixtures = match config.fixtures.resolved_path() {
        Some(path) => Fixtures::load_from_path(&path)?,
        None => Fixtures::demo()?,
    };
    let storage = FileStorage::new(config.storage.resolved_dir());
    Ok(SessionStore::open(
        fixtures,
        Box::new(storage),
        &config.storage.visited_tabs_key,
    ))
}
