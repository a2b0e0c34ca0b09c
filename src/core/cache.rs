//! Session-scoped response caching.
//!
//! Responses are stored as JSON text in sessionStorage, so they survive
//! navigation within a tab and disappear when the tab closes. Nothing is
//! ever evicted or expired by the client. Caching is best-effort: when
//! storage is unavailable every lookup misses and callers fall through to the
//! network.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::config::cache::{HOMEPAGE_KEY, SEARCH_PREFIX, SECTION_PREFIX};
use crate::core::error::CacheError;
use crate::models::SectionName;
use crate::utils::dom;

/// Raw string key/value storage.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// The browser's `sessionStorage`, resolved on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get_item(&self, key: &str) -> Option<String> {
        dom::session_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| CacheError::WriteFailed)
    }
}

/// In-memory store for tests. An unavailable store behaves like disabled
/// sessionStorage.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if self.unavailable {
            return Err(CacheError::StorageUnavailable);
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Cache key namespaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheKey {
    /// The homepage bundle.
    Homepage,
    /// Results for a lowercased search query.
    Search(String),
    /// Movies of one lazy section.
    Section(SectionName),
}

impl CacheKey {
    /// Key for a search query. Queries differing only in case share a key.
    pub fn search(query: &str) -> Self {
        Self::Search(query.to_lowercase())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Homepage => f.write_str(HOMEPAGE_KEY),
            Self::Search(query) => write!(f, "{}{}", SEARCH_PREFIX, query),
            Self::Section(name) => write!(f, "{}{}", SECTION_PREFIX, name),
        }
    }
}

/// Typed JSON cache over a [`SessionStore`].
#[derive(Debug, Default)]
pub struct ResponseCache<S> {
    store: S,
}

impl<S: SessionStore> ResponseCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a cached value.
    ///
    /// Returns `None` if the key doesn't exist, storage is unavailable, or
    /// the stored JSON no longer matches `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let json = self.store.get_item(&key.to_string())?;
        serde_json::from_str(&json).ok()
    }

    /// Store a value as JSON.
    pub fn set<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<(), CacheError> {
        let json =
            serde_json::to_string(value).map_err(|e| CacheError::SerializationFailed(e.to_string()))?;
        self.store.set_item(&key.to_string(), &json)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
