//! File-based credential slot for WSL and headless environments.
//!
//! Stores the credential record as a file on disk with restricted
//! permissions (0600 on Unix). This is less secure than a system
//! keychain but provides a fallback for development environments.

use std::fs;
use std::io;
use std::path::PathBuf;

use pl_core::{
    auth::Credential,
    ports::{CredentialKeychainPort, KeychainError},
};

use crate::credential_record::CredentialRecord;

const CREDENTIAL_FILE: &str = "credential.v1.json";

/// File-based keychain implementation.
///
/// The credential slot lives at `<base_dir>/credential.v1.json`.
///
/// # Security
///
/// - The file is created with mode 0600 (owner read/write only) on Unix
/// - Uses atomic write-and-rename to prevent corruption
/// - Only suitable for development environments
#[derive(Clone)]
pub struct FileKeychain {
    base_dir: PathBuf,
}

impl FileKeychain {
    /// Create a FileKeychain under the default base directory
    /// (`~/.config/com.passlock/`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config directory cannot be determined
    /// - The base directory cannot be created
    pub fn new() -> Result<Self, io::Error> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Cannot determine config directory")
            })?
            .join("com.passlock");

        fs::create_dir_all(&base_dir)?;

        Ok(Self { base_dir })
    }

    /// Create a FileKeychain with a custom base directory for testing.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn credential_path(&self) -> PathBuf {
        self.base_dir.join(CREDENTIAL_FILE)
    }
}

impl CredentialKeychainPort for FileKeychain {
    fn load(&self) -> Result<Option<Credential>, KeychainError> {
        let path = self.credential_path();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(KeychainError::Other(format!(
                    "failed to read credential file: {}",
                    e
                )))
            }
        };

        let record: CredentialRecord = serde_json::from_slice(&bytes)
            .map_err(|e| KeychainError::Corrupt(format!("invalid credential record: {e}")))?;
        Ok(Some(record.into_credential()))
    }

    fn store(&self, credential: &Credential) -> Result<(), KeychainError> {
        fs::create_dir_all(&self.base_dir).map_err(|e| {
            KeychainError::Other(format!("failed to create credential dir: {}", e))
        })?;

        let path = self.credential_path();
        let bytes = serde_json::to_vec(&CredentialRecord::from_credential(credential))
            .map_err(|e| KeychainError::Other(format!("failed to encode credential: {e}")))?;

        // Write to temporary file first, then atomic rename
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, &bytes).map_err(|e| {
            KeychainError::Other(format!("failed to write credential temp file: {}", e))
        })?;

        fs::rename(&temp_path, &path)
            .map_err(|e| KeychainError::Other(format!("failed to rename credential file: {}", e)))?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)
                .map_err(|e| {
                    KeychainError::Other(format!("failed to read credential metadata: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms).map_err(|e| {
                KeychainError::Other(format!("failed to set credential permissions: {}", e))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), KeychainError> {
        let path = self.credential_path();

        match fs::remove_file(&path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
            Err(e) => Err(KeychainError::Other(format!(
                "failed to delete credential file: {}",
                e
            ))),
        }
    }
}
