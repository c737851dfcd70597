use serde::{Deserialize, Serialize};

use crate::auth::password::Password;

/// The single stored account credential.
///
/// At most one credential exists per installation. It is created by
/// registration, survives logout, and is removed only by a full wipe.
pub struct Credential {
    pub email: String,
    pub password: Password,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: Password) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    /// Whether the submitted pair matches this credential.
    ///
    /// Email is an exact string match; the password comparison runs in
    /// constant time.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.ct_eq(password)
    }
}

/// Profile fields stored alongside the credential.
///
/// Mirrors the credential's email. Read on session check, removed only by
/// a full wipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// A full registration submission, including the password.
///
/// The password never leaves this type except into the stored
/// [`Credential`]; the persistable subset is [`RegistrationDraft`].
pub struct RegistrationForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: Password,
}

impl RegistrationForm {
    /// Build the profile from the submitted fields (never the password).
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

}

/// Partial registration fields persisted so an interrupted signup can
/// resume. Password and confirmation are structurally excluded: the type
/// cannot represent them, so no store call can leak them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl RegistrationDraft {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
    }
}

impl From<&RegistrationForm> for RegistrationDraft {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            email: Some(form.email.clone()),
            first_name: Some(form.first_name.clone()),
            last_name: Some(form.last_name.clone()),
            phone_number: Some(form.phone_number.clone()),
        }
    }
}
