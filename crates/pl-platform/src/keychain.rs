use keyring::Entry;
use pl_core::{
    auth::Credential,
    ports::{CredentialKeychainPort, KeychainError},
};

use crate::credential_record::CredentialRecord;

const SERVICE_NAME: &str = "Passlock";
const ACCOUNT_SLOT: &str = "account:v1";

trait KeychainEntryOps {
    fn get_secret(&self) -> Result<Vec<u8>, keyring::Error>;
    fn set_secret(&self, secret: &[u8]) -> Result<(), keyring::Error>;
    fn delete_credential(&self) -> Result<(), keyring::Error>;
}

trait KeychainBackend {
    type Entry: KeychainEntryOps;
    fn new_entry(&self, service: &str, username: &str) -> Result<Self::Entry, keyring::Error>;
}

struct RealBackend;

struct RealEntry {
    inner: Entry,
}

impl KeychainEntryOps for RealEntry {
    fn get_secret(&self) -> Result<Vec<u8>, keyring::Error> {
        self.inner.get_secret()
    }

    fn set_secret(&self, secret: &[u8]) -> Result<(), keyring::Error> {
        self.inner.set_secret(secret)
    }

    fn delete_credential(&self) -> Result<(), keyring::Error> {
        self.inner.delete_credential()
    }
}

impl KeychainBackend for RealBackend {
    type Entry = RealEntry;

    fn new_entry(&self, service: &str, username: &str) -> Result<Self::Entry, keyring::Error> {
        Entry::new(service, username).map(|inner| RealEntry { inner })
    }
}

fn slot_entry<B: KeychainBackend>(backend: &B) -> Result<B::Entry, KeychainError> {
    backend
        .new_entry(SERVICE_NAME, ACCOUNT_SLOT)
        .map_err(|e| KeychainError::Unavailable(format!("failed to access keychain entry: {}", e)))
}

fn load_with_backend<B: KeychainBackend>(
    backend: &B,
) -> Result<Option<Credential>, KeychainError> {
    let entry = slot_entry(backend)?;
    let secret = match entry.get_secret() {
        Ok(secret) => secret,
        Err(keyring::Error::NoEntry) => return Ok(None),
        Err(keyring::Error::NoStorageAccess(e)) => {
            return Err(KeychainError::PermissionDenied(e.to_string()))
        }
        Err(keyring::Error::PlatformFailure(e)) => {
            return Err(KeychainError::Other(e.to_string()))
        }
        Err(e) => return Err(KeychainError::Other(e.to_string())),
    };
    let record: CredentialRecord = serde_json::from_slice(&secret)
        .map_err(|e| KeychainError::Corrupt(format!("invalid credential record: {e}")))?;
    Ok(Some(record.into_credential()))
}

fn store_with_backend<B: KeychainBackend>(
    backend: &B,
    credential: &Credential,
) -> Result<(), KeychainError> {
    let entry = slot_entry(backend)?;
    let secret = serde_json::to_vec(&CredentialRecord::from_credential(credential))
        .map_err(|e| KeychainError::Other(format!("failed to encode credential record: {e}")))?;
    entry.set_secret(&secret).map_err(|e| match e {
        keyring::Error::NoStorageAccess(e) => KeychainError::PermissionDenied(e.to_string()),
        e => KeychainError::Other(format!("failed to store credential: {}", e)),
    })
}

fn clear_with_backend<B: KeychainBackend>(backend: &B) -> Result<(), KeychainError> {
    let entry = slot_entry(backend)?;
    match entry.delete_credential() {
        Ok(_) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(KeychainError::Other(format!(
            "failed to clear credential: {e}"
        ))),
    }
}

/// Credential slot in the OS keychain (macOS Keychain, Windows Credential
/// Manager, Linux Secret Service), keyed by a fixed service/account pair.
pub struct SystemKeychain {}

impl CredentialKeychainPort for SystemKeychain {
    fn load(&self) -> Result<Option<Credential>, KeychainError> {
        load_with_backend(&RealBackend)
    }

    fn store(&self, credential: &Credential) -> Result<(), KeychainError> {
        store_with_backend(&RealBackend, credential)
    }

    fn clear(&self) -> Result<(), KeychainError> {
        clear_with_backend(&RealBackend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_core::auth::Password;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeStore {
        secret: Mutex<Option<Vec<u8>>>,
        deny_access: bool,
    }

    struct FakeEntry {
        store: Arc<FakeStore>,
    }

    impl KeychainEntryOps for FakeEntry {
        fn get_secret(&self) -> Result<Vec<u8>, keyring::Error> {
            if self.store.deny_access {
                return Err(keyring::Error::NoStorageAccess("locked".into()));
            }
            match self.store.secret.lock().unwrap().clone() {
                Some(secret) => Ok(secret),
                None => Err(keyring::Error::NoEntry),
            }
        }

        fn set_secret(&self, secret: &[u8]) -> Result<(), keyring::Error> {
            if self.store.deny_access {
                return Err(keyring::Error::NoStorageAccess("locked".into()));
            }
            *self.store.secret.lock().unwrap() = Some(secret.to_vec());
            Ok(())
        }

        fn delete_credential(&self) -> Result<(), keyring::Error> {
            if self.store.secret.lock().unwrap().take().is_none() {
                return Err(keyring::Error::NoEntry);
            }
            Ok(())
        }
    }

    struct FakeBackend {
        store: Arc<FakeStore>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                store: Arc::new(FakeStore::default()),
            }
        }
    }

    impl KeychainBackend for FakeBackend {
        type Entry = FakeEntry;

        fn new_entry(&self, _service: &str, _username: &str) -> Result<FakeEntry, keyring::Error> {
            Ok(FakeEntry {
                store: self.store.clone(),
            })
        }
    }

    #[test]
    fn load_returns_none_when_slot_is_empty() {
        let backend = FakeBackend::new();
        assert!(load_with_backend(&backend).unwrap().is_none());
    }

    #[test]
    fn store_then_load_round_trips() {
        let backend = FakeBackend::new();
        let credential = Credential::new("a@b.com", Password::new("Passw0rd".into()));

        store_with_backend(&backend, &credential).unwrap();
        let loaded = load_with_backend(&backend).unwrap().unwrap();

        assert_eq!(loaded.email, "a@b.com");
        assert!(loaded.password.ct_eq("Passw0rd"));
    }

    #[test]
    fn store_replaces_prior_slot() {
        let backend = FakeBackend::new();

        store_with_backend(
            &backend,
            &Credential::new("a@b.com", Password::new("one".into())),
        )
        .unwrap();
        store_with_backend(
            &backend,
            &Credential::new("a@b.com", Password::new("two".into())),
        )
        .unwrap();

        let loaded = load_with_backend(&backend).unwrap().unwrap();
        assert!(loaded.password.ct_eq("two"));
    }

    #[test]
    fn corrupt_secret_reports_corrupt() {
        let backend = FakeBackend::new();
        *backend.store.secret.lock().unwrap() = Some(b"not json".to_vec());

        assert!(matches!(
            load_with_backend(&backend),
            Err(KeychainError::Corrupt(_))
        ));
    }

    #[test]
    fn clear_is_idempotent() {
        let backend = FakeBackend::new();
        store_with_backend(
            &backend,
            &Credential::new("a@b.com", Password::new("pw".into())),
        )
        .unwrap();

        clear_with_backend(&backend).unwrap();
        clear_with_backend(&backend).unwrap();
        assert!(load_with_backend(&backend).unwrap().is_none());
    }

    #[test]
    fn denied_access_maps_to_permission_denied() {
        let backend = FakeBackend {
            store: Arc::new(FakeStore {
                secret: Mutex::new(None),
                deny_access: true,
            }),
        };

        assert!(matches!(
            load_with_backend(&backend),
            Err(KeychainError::PermissionDenied(_))
        ));
    }
}
