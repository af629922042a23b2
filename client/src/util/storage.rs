//! `localStorage` backing for the session store.
//!
//! Browser-only (`csr`); native builds have no storage, so reads return
//! `None` and writes fail with a [`StorageError`] the store already handles.

use session::{Storage, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| StorageError::new("set", key, "localStorage unavailable"))?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::new("set", key, format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
            Err(StorageError::new("set", key, "localStorage unavailable"))
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage =
                local_storage().ok_or_else(|| StorageError::new("remove", key, "localStorage unavailable"))?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::new("remove", key, format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::new("remove", key, "localStorage unavailable"))
        }
    }
}
