//! Mutation operations for the SessionStore.
//!
//! Rejected business-rule mutations (duplicate movie, cancelling a cancelled
//! booking, unknown id) are no-ops reported through return values, never
//! errors.

use chrono::Utc;

use super::SessionStore;
use crate::error::StoreError;
use crate::model::{BookingStatus, WatchlistItem, WatchlistStatus, DEFAULT_GENRE, DEFAULT_RATING};
use crate::tabs;

/// Result of [`SessionStore::cancel_booking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The booking moved to `cancelled`.
    Cancelled,
    /// The booking was already cancelled; nothing changed.
    AlreadyCancelled,
    /// No booking has that id; nothing changed.
    NotFound,
}

impl SessionStore {
    /// Sets the generic-feed read flag.
    pub fn mark_notifications_as_read(&mut self) {
        self.notifications_read = true;
    }

    /// Sets the movie-feed read flag.
    pub fn mark_movie_notifications_as_read(&mut self) {
        self.movie_notifications_read = true;
    }

    /// Records `tab` as visited and writes the full set through to storage.
    ///
    /// Returns `Ok(true)` if the tab was newly recorded, `Ok(false)` if it was
    /// already visited. A storage write failure is logged, not returned.
    ///
    /// # Errors
    ///
    /// * `StoreError::EmptyTabId` - `tab` is empty.
    pub fn mark_tab_as_visited(&mut self, tab: &str) -> Result<bool, StoreError> {
        if tabs::is_rejected(tab) {
            return Err(StoreError::EmptyTabId);
        }

        let inserted = self.visited_tabs.insert(tab.to_string());
        if inserted {
            tracing::debug!("Tab '{}' visited", tab);
        }
        // Re-send on a repeat visit only if the last write was lost
        if inserted || !self.storage_in_sync {
            self.persist_visited_tabs();
        }
        Ok(inserted)
    }

    /// Adds a movie to the watchlist as now showing.
    ///
    /// Returns the new item, or `None` if the movie is already on the
    /// watchlist (the list is left untouched).
    pub fn add_to_watchlist(
        &mut self,
        movie_id: &str,
        title: &str,
        poster: &str,
    ) -> Option<WatchlistItem> {
        if self.watchlist.iter().any(|item| item.movie_id == movie_id) {
            tracing::debug!("Movie '{}' already on watchlist", movie_id);
            return None;
        }

        let now = Utc::now();
        let item = WatchlistItem {
            id: format!("wl-{}-{}", now.timestamp_millis(), self.next_item_seq),
            movie_id: movie_id.to_string(),
            movie_title: title.to_string(),
            movie_poster: poster.to_string(),
            release_date: now.format("%Y-%m-%d").to_string(),
            genre: vec![DEFAULT_GENRE.to_string()],
            rating: DEFAULT_RATING,
            added_at: now,
            status: WatchlistStatus::NowShowing,
        };
        self.next_item_seq += 1;

        tracing::debug!("Added '{}' to watchlist as {}", movie_id, item.id);
        self.watchlist.push(item.clone());
        Some(item)
    }

    /// Removes the watchlist item with the given item id.
    ///
    /// Returns the removed item, or `None` if no item matched.
    pub fn remove_from_watchlist(&mut self, id: &str) -> Option<WatchlistItem> {
        let index = self.watchlist.iter().position(|item| item.id == id)?;
        let removed = self.watchlist.remove(index);
        tracing::debug!("Removed '{}' from watchlist", removed.movie_id);
        Some(removed)
    }

    /// Cancels a booking. Cancelled is terminal, so repeats are no-ops.
    pub fn cancel_booking(&mut self, id: &str) -> CancelOutcome {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) else {
            tracing::debug!("Cancel ignored, no booking '{}'", id);
            return CancelOutcome::NotFound;
        };

        if !booking.status.can_transition_to(BookingStatus::Cancelled) {
            return CancelOutcome::AlreadyCancelled;
        }

        tracing::debug!("Booking '{}' {:?} -> Cancelled", id, booking.status);
        booking.status = BookingStatus::Cancelled;
        CancelOutcome::Cancelled
    }
}
