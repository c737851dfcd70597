use pl_core::auth::{Credential, Password};
use serde::{Deserialize, Serialize};

/// On-disk / in-keychain shape of the single credential slot.
///
/// This is the only place the password crosses into a serializable form;
/// both keychain adapters encode it as the entry's secret, never into the
/// plain key-value store.
#[derive(Serialize, Deserialize)]
pub(crate) struct CredentialRecord {
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn from_credential(credential: &Credential) -> Self {
        Self {
            email: credential.email.clone(),
            password: credential.password.expose().to_string(),
        }
    }

    pub fn into_credential(self) -> Credential {
        Credential::new(self.email, Password::new(self.password))
    }
}
