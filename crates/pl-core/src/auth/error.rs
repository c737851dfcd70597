use thiserror::Error;

/// Authentication failure taxonomy.
///
/// Every variant is recovered at the use-case boundary and converted into
/// a result object for the UI; none propagate as unhandled faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A credential with the submitted email is already stored.
    #[error("an account with this email already exists")]
    AlreadyExists,

    /// Writing the credential slot failed.
    #[error("could not save the account credentials")]
    CredentialStoreFailed,

    /// Writing the profile failed; the credential write was rolled back.
    #[error("could not save the account profile")]
    ProfileStoreFailed,

    /// Email or password did not match. Deliberately also covers the
    /// missing-credential case so the message leaks nothing about
    /// whether an account exists.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Too many consecutive failures; login is rejected for the rest of
    /// the window.
    #[error(
        "too many failed attempts, try again in {} minute(s)",
        .remaining_secs.div_ceil(60)
    )]
    LockedOut { remaining_secs: u64 },

    /// A credential exists but no profile does; the stored account data
    /// is inconsistent.
    #[error("account data is incomplete, profile is missing")]
    ProfileMissing,

    /// Catch-all for backend faults surfaced mid-flow.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AuthError {
    /// Stable machine-readable code for the UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::AlreadyExists => "already_exists",
            AuthError::CredentialStoreFailed => "credential_store_failed",
            AuthError::ProfileStoreFailed => "profile_store_failed",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::LockedOut { .. } => "locked_out",
            AuthError::ProfileMissing => "profile_missing",
            AuthError::Unexpected(_) => "unexpected",
        }
    }
}
