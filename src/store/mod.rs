//! Session state store for the cinema front end.
//!
//! This module owns notification read-state, the watchlist, booking
//! statuses and the visited-tab set for one session. Badge values are never
//! stored; every read re-derives them from the collections and flags (see
//! `badges.rs`).
//!
//! Construction is two-phase: [`SessionStore::new`] builds state from
//! fixtures alone, then [`SessionStore::hydrate`] overlays the visited tabs
//! found in durable storage and reports what happened as a [`Hydration`].
//! [`SessionStore::open`] does both.

use std::fmt;

use crate::fixtures::Fixtures;
use crate::model::{Booking, NotificationEntry, WatchlistItem};
use crate::snapshot::SessionSnapshot;
use crate::storage::KeyValueStorage;
use crate::tabs::VisitedTabs;

#[cfg(test)]
mod tests;

mod badges;
mod hydrate;
mod mutations;

pub use hydrate::Hydration;
pub use mutations::CancelOutcome;

/// Default storage key for the persisted visited-tab set.
pub const DEFAULT_VISITED_TABS_KEY: &str = "visitedTabs";

/// Single source of truth for one session.
///
/// Mutations take `&mut self` and complete before returning, including the
/// write-through to storage where one applies.
///
/// # Example
///
/// ```
/// use cinema_session::{Fixtures, MemoryStorage, NotificationEntry, SessionStore};
///
/// let fixtures = Fixtures {
///     notifications: vec![
///         NotificationEntry::new("n1", false),
///         NotificationEntry::new("n2", false),
///     ],
///     ..Fixtures::default()
/// };
/// let mut store = SessionStore::new(fixtures, Box::new(MemoryStorage::new()));
/// assert_eq!(store.unread_notifications(), 2);
///
/// store.mark_tab_as_visited("notifications").unwrap();
/// assert_eq!(store.unread_notifications(), 0);
/// ```
pub struct SessionStore {
    /// Seed collections, kept so reset can restore them.
    fixtures: Fixtures,
    /// Set by `mark_notifications_as_read`.
    notifications_read: bool,
    /// Set by `mark_movie_notifications_as_read`.
    movie_notifications_read: bool,
    /// The only state written to storage.
    visited_tabs: VisitedTabs,
    /// Session copy of the fixture watchlist.
    watchlist: Vec<WatchlistItem>,
    /// Session copy of the fixture bookings.
    bookings: Vec<Booking>,
    /// Durable backend for the visited tabs.
    storage: Box<dyn KeyValueStorage>,
    /// Key the visited tabs live under.
    storage_key: String,
    /// False after a failed write until the next successful one.
    storage_in_sync: bool,
    /// Sequence for ids of items added this session.
    next_item_seq: u64,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("notifications_read", &self.notifications_read)
            .field("movie_notifications_read", &self.movie_notifications_read)
            .field("visited_tabs", &self.visited_tabs)
            .field("watchlist_len", &self.watchlist.len())
            .field("bookings_len", &self.bookings.len())
            .field("storage_key", &self.storage_key)
            .field("storage_in_sync", &self.storage_in_sync)
            .finish()
    }
}

impl SessionStore {
    /// Builds the initial state from fixtures. Storage is not read yet.
    pub fn new(fixtures: Fixtures, storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            watchlist: fixtures.watchlist.clone(),
            bookings: fixtures.bookings.clone(),
            fixtures,
            notifications_read: false,
            movie_notifications_read: false,
            visited_tabs: VisitedTabs::new(),
            storage,
            storage_key: DEFAULT_VISITED_TABS_KEY.to_string(),
            storage_in_sync: true,
            next_item_seq: 1,
        }
    }

    /// Uses `key` instead of [`DEFAULT_VISITED_TABS_KEY`] for persistence.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Builds the store and hydrates the visited tabs, logging the outcome.
    ///
    /// Hydration problems never prevent the store from opening.
    pub fn open(fixtures: Fixtures, storage: Box<dyn KeyValueStorage>, key: &str) -> Self {
        let mut store = Self::new(fixtures, storage).with_storage_key(key);
        match store.hydrate() {
            Hydration::Empty => tracing::debug!("No visited tabs stored under '{}'", key),
            Hydration::Restored(count) => {
                tracing::info!("Restored {} visited tab(s) from '{}'", count, key)
            }
            Hydration::Malformed(reason) => tracing::warn!(
                "Ignoring malformed visited tabs under '{}': {}",
                key,
                reason
            ),
            Hydration::Unavailable(e) => {
                tracing::warn!("Could not read visited tabs, starting empty: {}", e)
            }
        }
        store
    }

    /// Key the visited-tab set is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Whether durable storage reflects the in-memory visited tabs.
    pub fn is_storage_in_sync(&self) -> bool {
        self.storage_in_sync
    }

    /// Generic notification feed as loaded from fixtures.
    pub fn notifications(&self) -> &[NotificationEntry] {
        &self.fixtures.notifications
    }

    /// Movie-release notification feed as loaded from fixtures.
    pub fn movie_notifications(&self) -> &[NotificationEntry] {
        &self.fixtures.movie_notifications
    }

    /// Current watchlist in insertion order.
    pub fn watchlist(&self) -> &[WatchlistItem] {
        &self.watchlist
    }

    /// Current bookings.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Looks up a booking by id.
    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Every tab visited so far, including restored ones.
    pub fn visited_tabs(&self) -> &VisitedTabs {
        &self.visited_tabs
    }

    /// Whether `tab` has been visited.
    pub fn is_tab_visited(&self, tab: &str) -> bool {
        self.visited_tabs.contains(tab)
    }

    /// Generic-feed read flag.
    pub fn notifications_read(&self) -> bool {
        self.notifications_read
    }

    /// Movie-feed read flag.
    pub fn movie_notifications_read(&self) -> bool {
        self.movie_notifications_read
    }

    /// Copies the current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            badges: self.badges(),
            watchlist: self.watchlist.clone(),
            bookings: self.bookings.clone(),
            visited_tabs: self.visited_tabs.clone(),
        }
    }

    /// Returns the session to the state it had right after construction
    /// with empty storage, and deletes the stored visited tabs.
    pub fn reset_all_notifications(&mut self) {
        self.visited_tabs.clear();
        self.notifications_read = false;
        self.movie_notifications_read = false;
        self.watchlist = self.fixtures.watchlist.clone();
        self.bookings = self.fixtures.bookings.clone();

        match self.storage.remove(&self.storage_key) {
            Ok(()) => self.storage_in_sync = true,
            Err(e) => {
                tracing::warn!("Failed to clear stored visited tabs: {}", e);
                self.storage_in_sync = false;
            }
        }
        tracing::info!("Session state reset to fixtures");
    }
}
