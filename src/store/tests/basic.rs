//! Construction, accessors and snapshots.

use super::*;
use crate::snapshot::Badges;

#[test]
fn new_store_mirrors_fixtures() {
    let fixtures = sample_fixtures();
    let (store, _storage) = create_test_store(fixtures.clone());

    assert_eq!(store.watchlist(), fixtures.watchlist.as_slice());
    assert_eq!(store.bookings(), fixtures.bookings.as_slice());
    assert_eq!(store.notifications().len(), 4);
    assert_eq!(store.movie_notifications().len(), 3);
    assert!(store.visited_tabs().is_empty());
    assert!(!store.notifications_read());
    assert!(!store.movie_notifications_read());
    assert!(store.is_storage_in_sync());
}

#[test]
fn new_store_does_not_touch_storage() {
    let storage = MemoryStorage::with_entry(KEY, r#"["notifications"]"#);
    let store = SessionStore::new(sample_fixtures(), Box::new(storage.clone()));

    // Hydration is a separate step
    assert!(store.visited_tabs().is_empty());
    assert_eq!(store.unread_notifications(), 3);
}

#[test]
fn empty_fixtures_give_zero_badges() {
    let (store, _storage) = create_test_store(Fixtures::default());
    assert_eq!(store.badges(), Badges::default());
}

#[test]
fn booking_lookup_by_id() {
    let (store, _storage) = create_test_store(sample_fixtures());
    assert_eq!(
        store.booking("b2").map(|b| b.status),
        Some(BookingStatus::Confirmed)
    );
    assert!(store.booking("missing").is_none());
}

#[test]
fn snapshot_reflects_current_state() {
    let (mut store, _storage) = create_test_store(sample_fixtures());
    store.mark_tab_as_visited("watchlist").unwrap();
    store.cancel_booking("b1");

    let snapshot = store.snapshot();
    assert_eq!(snapshot.badges, store.badges());
    assert_eq!(snapshot.badges.watchlist, 0);
    assert_eq!(snapshot.badges.cancelled_bookings, 2);
    assert_eq!(snapshot.bookings, store.bookings());
    assert!(snapshot.visited_tabs.contains("watchlist"));
}

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let (mut store, _storage) = create_test_store(sample_fixtures());
    let before = store.snapshot();

    store.add_to_watchlist("m9", "Later", "later.jpg");

    assert_eq!(before.watchlist.len(), 1);
    assert_eq!(store.snapshot().watchlist.len(), 2);
}

#[test]
fn custom_storage_key_is_used() {
    let storage = MemoryStorage::new();
    let mut store =
        SessionStore::new(sample_fixtures(), Box::new(storage.clone())).with_storage_key("tabs");
    assert_eq!(store.storage_key(), "tabs");

    store.mark_tab_as_visited("cancelled").unwrap();
    assert!(storage.contains("tabs"));
    assert!(!storage.contains(KEY));
}

#[test]
fn debug_output_names_store() {
    let (store, _storage) = create_test_store(sample_fixtures());
    let debug = format!("{:?}", store);
    assert!(debug.contains("SessionStore"));
    assert!(debug.contains("storage_in_sync"));
}
