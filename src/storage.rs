//! Durable Client Storage
//!
//! String key/value storage behind a trait so stores can run against
//! `localStorage` in the browser and an in-memory map in tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Process-wide durable key/value storage
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Envelope written for persisted store state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState<T> {
    pub state: T,
    #[serde(default)]
    pub version: u32,
}

/// Read and decode a persisted state envelope; corrupt entries read as absent
pub fn load_state<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str::<PersistedState<T>>(&raw) {
        Ok(persisted) => Some(persisted.state),
        Err(e) => {
            log::warn!("[STORAGE] Discarding unreadable entry '{}': {}", key, e);
            None
        }
    }
}

/// Encode and write a persisted state envelope
pub fn save_state<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, state: &T) {
    let envelope = PersistedState { state, version: 0 };
    match serde_json::to_string(&envelope) {
        Ok(raw) => storage.set(key, &raw),
        Err(e) => log::error!("[STORAGE] Failed to encode '{}': {}", key, e),
    }
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`; silently no-ops when storage is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            log::warn!("[STORAGE] localStorage unavailable, '{}' not saved", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("[STORAGE] Failed to write '{}'", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ========================
// In-memory storage
// ========================

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
