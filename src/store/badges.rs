//! Derived badge values.
//!
//! Each badge is computed from the underlying collection plus the read and
//! visited flags at the moment it is asked for. There are no counters to
//! keep in step with mutations.

use super::SessionStore;
use crate::model::{BookingStatus, NotificationEntry};
use crate::snapshot::Badges;
use crate::tabs;

fn count_unread(feed: &[NotificationEntry]) -> usize {
    feed.iter().filter(|entry| !entry.is_read).count()
}

impl SessionStore {
    /// Unread generic notifications; zero once the feed is marked read or
    /// its tab visited.
    pub fn unread_notifications(&self) -> usize {
        if self.notifications_read || self.is_tab_visited(tabs::NOTIFICATIONS) {
            return 0;
        }
        count_unread(&self.fixtures.notifications)
    }

    /// Unread movie-release notifications; same rule as the generic feed.
    pub fn unread_movie_notifications(&self) -> usize {
        if self.movie_notifications_read || self.is_tab_visited(tabs::MOVIE_NOTIFICATIONS) {
            return 0;
        }
        count_unread(&self.fixtures.movie_notifications)
    }

    /// Watchlist length until the watchlist tab is visited.
    pub fn watchlist_badge(&self) -> usize {
        if self.is_tab_visited(tabs::WATCHLIST) {
            return 0;
        }
        self.watchlist.len()
    }

    /// Cancelled bookings until the cancelled tab is visited.
    pub fn cancelled_bookings_badge(&self) -> usize {
        if self.is_tab_visited(tabs::CANCELLED) {
            return 0;
        }
        self.bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Cancelled)
            .count()
    }

    /// All four badges at once.
    pub fn badges(&self) -> Badges {
        Badges {
            notifications: self.unread_notifications(),
            movie_notifications: self.unread_movie_notifications(),
            watchlist: self.watchlist_badge(),
            cancelled_bookings: self.cancelled_bookings_badge(),
        }
    }
}
