use std::sync::Mutex;

use pl_core::auth::{Credential, Password};
use pl_core::ports::{CredentialKeychainPort, KeychainError};

/// In-memory single-slot keychain for tests and headless runs.
///
/// Holds the pair as plain strings; nothing here is encrypted, which is
/// the point — it stands in for the OS keychain where none exists.
#[derive(Default)]
pub struct MemoryKeychain {
    slot: Mutex<Option<(String, String)>>,
}

impl MemoryKeychain {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialKeychainPort for MemoryKeychain {
    fn load(&self) -> Result<Option<Credential>, KeychainError> {
        Ok(self
            .slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|(email, password)| Credential::new(email.clone(), Password::new(password.clone()))))
    }

    fn store(&self, credential: &Credential) -> Result<(), KeychainError> {
        *self.slot.lock().unwrap() = Some((
            credential.email.clone(),
            credential.password.expose().to_string(),
        ));
        Ok(())
    }

    fn clear(&self) -> Result<(), KeychainError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
