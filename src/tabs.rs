//! Tab identifiers that suppress badges once visited.
//!
//! Tab ids are opaque strings; the store accepts any non-empty id. These are
//! the ones the badge rules look for.

use std::collections::BTreeSet;

/// Generic notification feed tab.
pub const NOTIFICATIONS: &str = "notifications";

/// Movie-release notification feed tab.
pub const MOVIE_NOTIFICATIONS: &str = "movie-notifications";

/// Watchlist tab.
pub const WATCHLIST: &str = "watchlist";

/// Cancelled bookings tab.
pub const CANCELLED: &str = "cancelled";

/// Set of visited tab ids. Ordered so the persisted JSON is stable.
pub type VisitedTabs = BTreeSet<String>;

/// Returns true for ids the store refuses to record.
///
/// Only the empty string is refused; whitespace is part of an opaque id.
pub fn is_rejected(tab: &str) -> bool {
    tab.is_empty()
}
