//! History Manager for Foo Screen.
//!
//! Implements `HistoryManagerTrait`: the most-recent-first recency list of
//! submitted URLs, persisted as one string array in the defaults store.

use crate::services::defaults_store::{DefaultsStore, DefaultsStoreTrait};
use crate::types::errors::HistoryError;
use crate::types::history::HISTORY_KEY;

/// Trait defining recency list operations.
pub trait HistoryManagerTrait {
    fn insert(&mut self, url: &str) -> Result<(), HistoryError>;
    fn list(&self) -> Result<Vec<String>, HistoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<String>, HistoryError>;
    fn clear(&mut self) -> Result<(), HistoryError>;
    fn is_empty(&self) -> Result<bool, HistoryError>;
}

/// History manager backed by the defaults store.
#[derive(Clone)]
pub struct HistoryManager {
    store: DefaultsStore,
}

impl HistoryManager {
    pub fn new(store: DefaultsStore) -> Self {
        Self { store }
    }
}

/// Moves `url` to the front of `history`, dropping any earlier occurrence.
pub fn move_to_front(history: &mut Vec<String>, url: &str) {
    history.retain(|entry| entry != url);
    history.insert(0, url.to_string());
}

impl HistoryManagerTrait for HistoryManager {
    /// Prepends `url`. An existing identical entry is moved, not duplicated.
    fn insert(&mut self, url: &str) -> Result<(), HistoryError> {
        if url.is_empty() {
            return Err(HistoryError::EmptyUrl);
        }
        let mut history = self.list()?;
        move_to_front(&mut history, url);
        self.store.set_string_array(HISTORY_KEY, &history)?;
        log::debug!("[HISTORY] {} ({} entries)", url, history.len());
        Ok(())
    }

    /// Full stored list, most recent first. A missing key is an empty list.
    fn list(&self) -> Result<Vec<String>, HistoryError> {
        Ok(self
            .store
            .get_string_array(HISTORY_KEY)?
            .unwrap_or_default())
    }

    fn recent(&self, limit: usize) -> Result<Vec<String>, HistoryError> {
        let mut history = self.list()?;
        history.truncate(limit);
        Ok(history)
    }

    /// Removes the key entirely rather than storing an empty list.
    fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.remove(HISTORY_KEY)?;
        log::info!("[HISTORY] cleared");
        Ok(())
    }

    fn is_empty(&self) -> Result<bool, HistoryError> {
        Ok(self.list()?.is_empty())
    }
}
