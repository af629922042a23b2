//! File-backed durable storage for the terminal client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plays the role the browser's `localStorage` plays for the web client: a
//! flat string map, here one JSON object in `<state_dir>/session.json`.
//!
//! DESIGN
//! ======
//! Every write rewrites the whole file through a temp file and rename, so a
//! crash mid-write leaves either the old or the new map, never a mix. The
//! in-memory map is only changed once the file write has succeeded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use session::{Storage, StorageError};

const FILE_NAME: &str = "session.json";

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open (or lazily create) the store under `dir`.
    ///
    /// An unreadable or corrupt file is treated as empty; the next write
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if `dir` cannot be created.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(|e| StorageError::new("open", FILE_NAME, e.to_string()))?;
        let path = dir.join(FILE_NAME);
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %path.display(), "ignoring corrupt session file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "ignoring unreadable session file");
                BTreeMap::new()
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &BTreeMap<String, String>, key: &str, op: &'static str) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries).map_err(|e| StorageError::new(op, key, e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| StorageError::new(op, key, e.to_string()))?;
        restrict_permissions(&tmp).map_err(|e| StorageError::new(op, key, e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::new(op, key, e.to_string()))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.write(&next, key, "set")?;
        self.entries = next;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.write(&next, key, "remove")?;
        self.entries = next;
        Ok(())
    }
}

/// The file holds a bearer token; keep it owner-only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
