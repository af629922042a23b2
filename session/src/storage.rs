//! Durable key/value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the browser `localStorage` surface: string keys, string values.
//! The browser client backs this with `web_sys::Storage`, the terminal client
//! with a JSON file. Writes report failure so the store can fail loudly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::StorageError;

/// Key holding the JSON-encoded [`crate::User`].
pub const USER_KEY: &str = "user";
/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// String key/value store with fallible writes.
pub trait Storage {
    /// Read `key`; unreadable entries count as absent.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write did not complete.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the delete did not complete.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
