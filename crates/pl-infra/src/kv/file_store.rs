//! File-backed key-value store
//!
//! One file per key under a base directory. Writes go through a temp file
//! and an atomic rename so a crash cannot leave a half-written entry.
//! Keys are the fixed identifiers from [`crate::store::keys`], never
//! user input, so they map directly to file names.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use pl_core::ports::{KeyValueStorePort, KvStoreError};
use tokio::fs;

const STORE_DIR_NAME: &str = "com.passlock";

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store under the platform config directory
    /// (`~/.config/com.passlock/` on Linux).
    pub fn new() -> Result<Self, io::Error> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Cannot determine config directory")
            })?
            .join(STORE_DIR_NAME);

        std::fs::create_dir_all(&base_dir)?;

        Ok(Self { base_dir })
    }

    /// Create a store with a custom base directory for testing.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvStoreError> {
        let path = self.entry_path(key);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvStoreError::Io(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvStoreError> {
        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            KvStoreError::Io(format!(
                "failed to create {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;

        let path = self.entry_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).await.map_err(|e| {
            KvStoreError::Io(format!(
                "failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &path).await.map_err(|e| {
            KvStoreError::Io(format!("failed to rename into {}: {}", path.display(), e))
        })
    }

    async fn remove(&self, key: &str) -> Result<(), KvStoreError> {
        let path = self.entry_path(key);

        match fs::remove_file(&path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
            Err(e) => Err(KvStoreError::Io(format!(
                "failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
