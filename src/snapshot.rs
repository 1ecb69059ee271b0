//! Read-only views handed to UI consumers.

use serde::{Deserialize, Serialize};

use crate::model::{Booking, WatchlistItem};
use crate::tabs::VisitedTabs;

/// The four derived badge values.
///
/// Produced fresh by [`crate::SessionStore::badges`] on every call; nothing
/// in the store holds one of these between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badges {
    /// Unread generic notifications.
    pub notifications: usize,
    /// Unread movie-release notifications.
    pub movie_notifications: usize,
    /// Items on the watchlist.
    pub watchlist: usize,
    /// Cancelled bookings.
    pub cancelled_bookings: usize,
}

impl Badges {
    /// Sum of all four badges.
    pub fn total(&self) -> usize {
        self.notifications + self.movie_notifications + self.watchlist + self.cancelled_bookings
    }
}

/// Point-in-time copy of everything a consumer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Badge values derived at snapshot time.
    pub badges: Badges,
    /// Watchlist in insertion order.
    pub watchlist: Vec<WatchlistItem>,
    /// Bookings with their current statuses.
    pub bookings: Vec<Booking>,
    /// Tabs visited in this or an earlier session.
    pub visited_tabs: VisitedTabs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_serialize_camel_case() {
        let badges = Badges {
            notifications: 3,
            movie_notifications: 2,
            watchlist: 1,
            cancelled_bookings: 0,
        };
        let json = serde_json::to_value(badges).unwrap();
        assert_eq!(json["movieNotifications"], 2);
        assert_eq!(json["cancelledBookings"], 0);
        assert_eq!(badges.total(), 6);
    }

    #[test]
    fn visited_tabs_serialize_sorted() {
        let snapshot = SessionSnapshot {
            badges: Badges::default(),
            watchlist: Vec::new(),
            bookings: Vec::new(),
            visited_tabs: ["watchlist", "cancelled", "notifications"]
                .into_iter()
                .map(String::from)
                .collect(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json["visitedTabs"],
            serde_json::json!(["cancelled", "notifications", "watchlist"])
        );
    }
}
