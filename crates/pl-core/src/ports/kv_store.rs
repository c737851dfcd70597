use async_trait::async_trait;
use thiserror::Error;

/// Key-value backend errors.
#[derive(Debug, Error)]
pub enum KvStoreError {
    /// The backend could not be read or written.
    #[error("key-value backend i/o failed: {0}")]
    Io(String),

    /// An entry exists but could not be decoded.
    #[error("key-value entry corrupt: {0}")]
    Corrupt(String),
}

/// Plain (unencrypted) key-value persistence port.
///
/// Used under fixed keys for the profile blob, the registration draft,
/// the lockout fields, and the session flag — each value a JSON document
/// or JSON scalar string. `remove` is idempotent.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KvStoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KvStoreError>;

    async fn remove(&self, key: &str) -> Result<(), KvStoreError>;
}
