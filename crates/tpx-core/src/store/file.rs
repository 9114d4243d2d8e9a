//! Persist the key-value map to disk (JSON under XDG state dir) so the
//! identity token survives across runs.

use anyhow::Result;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::KvStore;

/// Failure opening or parsing a store file.
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON-file backed store. Every `set` writes through to disk; a write
/// failure is logged and the in-memory value kept, since callers treat the
/// store as infallible.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Default path for the store file: `~/.local/state/tpx/store.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("tpx")?;
        Ok(xdg_dirs.get_state_home().join("store.json"))
    }

    /// Open the store at its default XDG path.
    pub fn open_default() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self::open_at(&path)?)
    }

    /// Open the store at the given path. A missing file yields an empty store.
    pub fn open_at(path: &Path) -> Result<Self, FileStoreError> {
        let values = match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                FileStoreError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(FileStoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("failed to persist store at {}: {:#}", self.path.display(), e);
        }
    }

    fn try_persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open_at(&path).unwrap();
        assert_eq!(store.get("anything", "dflt"), "dflt");
    }

    #[test]
    fn set_writes_through_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        let mut store = FileStore::open_at(&path).unwrap();
        store.set("unic_id", "ab12cd34");
        store.set("proxy_tmdb", "true");

        let reopened = FileStore::open_at(&path).unwrap();
        assert_eq!(reopened.get("unic_id", ""), "ab12cd34");
        assert_eq!(reopened.get("proxy_tmdb", "false"), "true");
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"not json").unwrap();
        match FileStore::open_at(&path) {
            Err(FileStoreError::Parse { .. }) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
