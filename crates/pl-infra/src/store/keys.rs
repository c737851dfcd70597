//! Fixed key-value identifiers for durable account state.

pub const USER_PROFILE: &str = "account.profile";
pub const REGISTRATION_DRAFT: &str = "account.registration_draft";
pub const FAILED_ATTEMPTS: &str = "account.failed_attempts";
pub const LOCKOUT_STARTED_AT: &str = "account.lockout_started_at";
pub const SESSION_ACTIVE: &str = "account.session_active";
