pub mod errors;
pub mod models;

use actix_session::Session;
use chrono::Local;
use log::warn;
use crate::manager_history::errors::HistoryError;
use crate::manager_history::models::SearchHistoryEntry;

pub const HISTORY_KEY: &str = "SearchHistory";
const MAX_ENTRIES: usize = 10;

/// String key/value storage scoped to one user session
///
pub trait SessionStorage {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&self, key: &str, value: String) -> Result<(), HistoryError>;
    fn remove(&self, key: &str);
}

impl SessionStorage for Session {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get::<String>(key).ok().flatten()
    }

    fn set_string(&self, key: &str, value: String) -> Result<(), HistoryError> {
        self.insert(key, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        Session::remove(self, key);
    }
}

/// Returns the search history stored in the session, most recent first
///
/// A missing or unreadable history gives an empty list.
///
/// # Arguments
///
/// * 'storage' - session storage
pub fn get(storage: &impl SessionStorage) -> Vec<SearchHistoryEntry> {
    let json = match storage.get_string(HISTORY_KEY) {
        Some(json) if !json.is_empty() => json,
        _ => return Vec::new(),
    };

    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!("discarding unreadable search history: {}", e);
        Vec::new()
    })
}

/// Records a search for the given city and returns the updated history
///
/// Any earlier entry for the same city (ignoring case) is replaced by a new one at the
/// front, and the history is truncated to the ten most recent searches.
///
/// # Arguments
///
/// * 'storage' - session storage
/// * 'city' - the searched city name
pub fn record(storage: &impl SessionStorage, city: &str) -> Result<Vec<SearchHistoryEntry>, HistoryError> {
    let mut history = get(storage);

    let key = city.to_lowercase();
    history.retain(|e| e.city_name.to_lowercase() != key);
    history.insert(0, SearchHistoryEntry { city_name: city.to_string(), search_time: Local::now() });
    history.truncate(MAX_ENTRIES);

    storage.set_string(HISTORY_KEY, serde_json::to_string(&history)?)?;

    Ok(history)
}

/// Removes the search history from the session
///
/// # Arguments
///
/// * 'storage' - session storage
pub fn clear(storage: &impl SessionStorage) {
    storage.remove(HISTORY_KEY);
}
