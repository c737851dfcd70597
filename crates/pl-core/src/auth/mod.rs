//! Account / authentication domain models.
//!
//! This module contains the pure domain types for the local account flow:
//! the stored credential, the user profile, the registration form and its
//! persistable draft, the lockout state machine, and the error taxonomy.
//! It does NOT touch the keychain, the key-value store, or any clock.

pub mod error;
pub mod lockout;
pub mod model;
pub mod password;

pub use error::AuthError;
pub use lockout::{LockoutState, LOCKOUT_WINDOW_MS, MAX_FAILED_ATTEMPTS};
pub use model::{Credential, RegistrationDraft, RegistrationForm, UserProfile};
pub use password::Password;
