//! Booking Cache
//!
//! Mirrors successful bookings as `cat id -> email` in browser
//! `localStorage`, so a revisit can disable the choose control without a
//! network round trip. Nothing reconciles it with the remote table.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use thiserror::Error;

/// Default storage key for the booking map
pub const DEFAULT_CACHE_KEY: &str = "catBookings";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    #[error("Хранилище браузера недоступно")]
    StorageUnavailable,
    #[error("Не удалось сохранить бронирование: {0}")]
    Serialization(String),
    #[error("Не удалось записать данные в хранилище браузера")]
    WriteFailed,
}

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// `window.localStorage`
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> Result<Self, CacheError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(CacheError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| CacheError::WriteFailed)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_item(key, value)
    }
}

/// In-memory store, gone with the page. Clones share the same map, like
/// two page loads sharing one browser profile.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `localStorage` when the browser grants it, otherwise a store that only
/// lives as long as the page
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStorageStore::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("{}, bookings will not survive a reload", e);
            Box::new(MemoryStore::default())
        }
    }
}

/// Booked cats for this browser
pub struct BookingCache<S: KeyValueStore> {
    store: S,
    key: String,
    entries: BTreeMap<u32, String>,
}

impl<S: KeyValueStore> BookingCache<S> {
    /// Read the map under `key`. Missing or corrupt data yields an empty cache.
    pub fn load(store: S, key: &str) -> Self {
        let entries = match store.get_item(key) {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("ignoring unreadable booking cache {}: {}", key, e);
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        tracing::debug!("booking cache loaded with {} entries", entries.len());
        Self {
            store,
            key: key.to_string(),
            entries,
        }
    }

    pub fn is_booked(&self, cat_id: u32) -> bool {
        self.entries.contains_key(&cat_id)
    }

    pub fn email_for(&self, cat_id: u32) -> Option<&str> {
        self.entries.get(&cat_id).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<u32, String> {
        &self.entries
    }

    /// Remember a booking and persist the whole map
    pub fn record(&mut self, cat_id: u32, email: &str) -> Result<(), CacheError> {
        self.entries.insert(cat_id, email.to_string());
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        self.store.set_item(&self.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_empty_cache() {
        let cache = BookingCache::load(MemoryStore::default(), DEFAULT_CACHE_KEY);
        assert!(cache.entries().is_empty());
        assert!(!cache.is_booked(1));
    }

    #[test]
    fn test_record_survives_reload() {
        let store = MemoryStore::default();
        let mut cache = BookingCache::load(store.clone(), DEFAULT_CACHE_KEY);
        cache.record(3, "anna@example.com").unwrap();

        let reloaded = BookingCache::load(store, DEFAULT_CACHE_KEY);
        assert!(reloaded.is_booked(3));
        assert_eq!(reloaded.email_for(3), Some("anna@example.com"));
        assert!(!reloaded.is_booked(4));
    }

    #[test]
    fn test_persisted_json_is_keyed_by_cat_id() {
        let store = MemoryStore::default();
        let mut cache = BookingCache::load(store.clone(), DEFAULT_CACHE_KEY);
        cache.record(12, "a@b.co").unwrap();
        assert_eq!(
            store.get_item(DEFAULT_CACHE_KEY).as_deref(),
            Some(r#"{"12":"a@b.co"}"#)
        );
    }

    #[test]
    fn test_corrupt_data_is_ignored() {
        let store = MemoryStore::default();
        store.set_item(DEFAULT_CACHE_KEY, "not json").unwrap();
        let mut cache = BookingCache::load(store.clone(), DEFAULT_CACHE_KEY);
        assert!(cache.entries().is_empty());

        cache.record(1, "x@y.zz").unwrap();
        assert!(BookingCache::load(store, DEFAULT_CACHE_KEY).is_booked(1));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let store = MemoryStore::default();
        let boxed: Box<dyn KeyValueStore> = Box::new(store.clone());
        BookingCache::load(boxed, DEFAULT_CACHE_KEY)
            .record(7, "m@n.op")
            .unwrap();
        assert!(BookingCache::load(store, DEFAULT_CACHE_KEY).is_booked(7));
    }

    #[test]
    fn test_key_namespaces_are_separate() {
        let store = MemoryStore::default();
        BookingCache::load(store.clone(), "other")
            .record(5, "q@w.ee")
            .unwrap();
        assert!(!BookingCache::load(store, DEFAULT_CACHE_KEY).is_booked(5));
    }
}
