//! Tests for the SessionStore module.
//!
//! Tests are organized into categories:
//! - `basic`: construction, accessors, snapshot
//! - `badges`: derivation rules for the four badges
//! - `watchlist`: add/remove and movie uniqueness
//! - `bookings`: cancellation and the monotonic status rule
//! - `visited`: tab visits and write-through
//! - `hydrate`: loading visited tabs from storage
//! - `reset`: returning to the fixture state

mod basic;

use super::SessionStore;
use crate::error::StorageError;
use crate::fixtures::Fixtures;
use crate::model::{
    Booking, BookingStatus, NotificationEntry, WatchlistItem, WatchlistStatus,
};
use crate::storage::{KeyValueStorage, MemoryStorage, StorageResult};
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub(super) const KEY: &str = crate::store::DEFAULT_VISITED_TABS_KEY;

pub(super) fn watchlist_item(id: &str, movie_id: &str) -> WatchlistItem {
    WatchlistItem {
        id: id.to_string(),
        movie_id: movie_id.to_string(),
        movie_title: format!("Movie {}", movie_id),
        movie_poster: format!("{}.jpg", movie_id),
        release_date: "2024-03-01".to_string(),
        genre: vec!["Drama".to_string()],
        rating: 7.5,
        added_at: Utc.with_ymd_and_hms(2024, 2, 20, 10, 0, 0).unwrap(),
        status: WatchlistStatus::ComingSoon,
    }
}

pub(super) fn booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        movie_id: "m1".to_string(),
        showtime_id: "st-1".to_string(),
        seats: vec!["F7".to_string()],
        total_amount: 12.0,
        status,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
        qr_code: format!("QR-{}", id),
    }
}

/// 3 unread + 1 read generic entries, 2 unread + 1 read movie entries,
/// watchlist with m1, bookings b1 pending, b2 confirmed, b3 cancelled.
pub(super) fn sample_fixtures() -> Fixtures {
    Fixtures {
        notifications: vec![
            NotificationEntry::new("n1", false),
            NotificationEntry::new("n2", false),
            NotificationEntry::new("n3", false),
            NotificationEntry::new("n4", true),
        ],
        movie_notifications: vec![
            NotificationEntry::new("mn1", false),
            NotificationEntry::new("mn2", false),
            NotificationEntry::new("mn3", true),
        ],
        watchlist: vec![watchlist_item("wl-1", "m1")],
        bookings: vec![
            booking("b1", BookingStatus::Pending),
            booking("b2", BookingStatus::Confirmed),
            booking("b3", BookingStatus::Cancelled),
        ],
    }
}

/// Store over fresh memory storage, plus a handle to that storage.
pub(super) fn create_test_store(fixtures: Fixtures) -> (SessionStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(fixtures, Box::new(storage.clone()));
    (store, storage)
}

/// Reads what the store last persisted, decoded.
pub(super) fn stored_tabs(storage: &MemoryStorage) -> Option<Vec<String>> {
    storage
        .get(KEY)
        .expect("memory storage never fails")
        .map(|raw| serde_json::from_str(&raw).expect("stored tabs should be valid JSON"))
}

/// Storage whose reads and writes can be switched to fail.
#[derive(Clone, Default)]
pub(super) struct FlakyStorage {
    inner: MemoryStorage,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyStorage {
    pub(super) fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(super) fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub(super) fn inner(&self) -> &MemoryStorage {
        &self.inner
    }
}

impl KeyValueStorage for FlakyStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("read disabled".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("remove disabled".to_string()));
        }
        self.inner.remove(key)
    }
}
