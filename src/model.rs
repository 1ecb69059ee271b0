//! Entity types owned by the session store.
//!
//! Field names serialize in camelCase so fixture files and snapshots share
//! the shape the front end already speaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Genre assigned to watchlist items added during a session.
pub const DEFAULT_GENRE: &str = "Action";

/// Rating assigned to watchlist items added during a session.
pub const DEFAULT_RATING: f32 = 8.0;

/// A single entry in one of the two notification feeds.
///
/// Only `id` and `is_read` matter to badge derivation; the rest is carried
/// through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEntry {
    /// Unique entry identifier within its feed.
    pub id: String,
    /// Whether the entry was already read when the feed was loaded.
    pub is_read: bool,
    /// Headline shown in the feed.
    #[serde(default)]
    pub title: String,
    /// Body text shown under the headline.
    #[serde(default)]
    pub message: String,
    /// Free-form relative time label ("2h ago").
    #[serde(default)]
    pub time: String,
}

impl NotificationEntry {
    /// Creates an entry with empty display fields.
    pub fn new(id: impl Into<String>, is_read: bool) -> Self {
        Self {
            id: id.into(),
            is_read,
            title: String::new(),
            message: String::new(),
            time: String::new(),
        }
    }
}

/// Release state of a watchlisted movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchlistStatus {
    /// Currently playing in cinemas.
    NowShowing,
    /// Announced but not yet released.
    ComingSoon,
}

/// A movie the user saved to their watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    /// Watchlist item identifier (distinct from the movie id).
    pub id: String,
    /// Catalog id of the movie; unique across the watchlist.
    pub movie_id: String,
    /// Display title.
    pub movie_title: String,
    /// Poster image URL or path.
    pub movie_poster: String,
    /// Release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// Genre labels, most relevant first.
    pub genre: Vec<String>,
    /// Audience rating out of 10.
    pub rating: f32,
    /// When the item was saved.
    pub added_at: DateTime<Utc>,
    /// Release state; only changes when fixtures change.
    pub status: WatchlistStatus,
}

/// Booking status.
///
/// `Cancelled` is terminal: see [`BookingStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Seats held, payment not yet confirmed.
    Pending,
    /// Paid and issued.
    Confirmed,
    /// Cancelled by the user.
    Cancelled,
}

impl BookingStatus {
    /// Returns true once the booking can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }

    /// Whether moving from `self` to `next` respects the monotonic status rule.
    ///
    /// Nothing leaves `Cancelled`, and a status never transitions to itself.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        !self.is_terminal() && self != next
    }
}

/// A ticket booking for one showtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking identifier.
    pub id: String,
    /// Catalog id of the booked movie.
    pub movie_id: String,
    /// Showtime the seats belong to.
    pub showtime_id: String,
    /// Seat labels such as `"F7"`.
    pub seats: Vec<String>,
    /// Price paid for all seats.
    pub total_amount: f64,
    /// Current status; see [`BookingStatus::can_transition_to`].
    pub status: BookingStatus,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
    /// Payload rendered as the entry QR code.
    pub qr_code: String,
}
