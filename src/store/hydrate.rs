//! Visited-tab persistence: hydration at startup and write-through.

use super::SessionStore;
use crate::error::StorageError;
use crate::tabs::{self, VisitedTabs};

/// What hydration found in durable storage.
#[derive(Debug)]
pub enum Hydration {
    /// Nothing stored under the key.
    Empty,
    /// A valid set was found; carries how many tab ids it held.
    Restored(usize),
    /// Stored content was not a JSON array of strings. The set is left as it was.
    Malformed(String),
    /// The backend could not be read. The set is left as it was.
    Unavailable(StorageError),
}

/// Decodes the stored JSON array, dropping empty ids.
fn decode(content: &str) -> Result<VisitedTabs, String> {
    let ids: Vec<String> = serde_json::from_str(content).map_err(|e| e.to_string())?;
    Ok(ids.into_iter().filter(|id| !tabs::is_rejected(id)).collect())
}

impl SessionStore {
    /// Overlays visited tabs from durable storage onto the current set.
    ///
    /// Never fails: unreadable or malformed content leaves the set as it was
    /// and is reported through the returned [`Hydration`].
    ///
    /// Tabs already in memory that storage lacks are written back when the
    /// stored set is readable, otherwise storage is marked out of sync so the
    /// next visit rewrites it.
    pub fn hydrate(&mut self) -> Hydration {
        let outcome = match self.storage.get(&self.storage_key) {
            Ok(Some(content)) => match decode(&content) {
                Ok(stored) => {
                    let count = stored.len();
                    let storage_behind = !self.visited_tabs.is_subset(&stored);
                    self.visited_tabs.extend(stored);
                    if storage_behind {
                        self.persist_visited_tabs();
                    }
                    return Hydration::Restored(count);
                }
                Err(reason) => Hydration::Malformed(reason),
            },
            Ok(None) => Hydration::Empty,
            Err(e) => Hydration::Unavailable(e),
        };

        if !self.visited_tabs.is_empty() {
            self.storage_in_sync = false;
        }
        outcome
    }

    /// Writes the full visited-tab set to storage.
    ///
    /// Failures are logged and leave memory authoritative; the next
    /// successful write brings storage back in line.
    pub(super) fn persist_visited_tabs(&mut self) {
        let encoded = match serde_json::to_string(&self.visited_tabs) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("Failed to encode visited tabs: {}", e);
                self.storage_in_sync = false;
                return;
            }
        };

        match self.storage.set(&self.storage_key, &encoded) {
            Ok(()) => {
                if !self.storage_in_sync {
                    tracing::info!("Visited tabs re-synchronized to storage");
                }
                self.storage_in_sync = true;
            }
            Err(e) => {
                tracing::warn!("Failed to persist visited tabs: {}", e);
                self.storage_in_sync = false;
            }
        }
    }
}
