//! Credential & session store port
//!
//! This port is the contract between the authentication use cases and the
//! durable account state: the keychain credential slot, the profile blob,
//! the partial-registration draft, the lockout counters, and the session
//! flag. Implementations live in the infrastructure layer.

use async_trait::async_trait;

use crate::auth::{Credential, Password, RegistrationDraft, UserProfile};

/// Durable account state, as seen by the use cases.
///
/// Every operation fails softly: storage faults are logged by the
/// implementation and surface as `false` / `None` / `0` rather than an
/// error, leaving the caller to decide whether that is user-facing. The
/// one deliberate exception is [`record_failed_attempt`], where a fault
/// must not silently weaken the rate limit.
///
/// [`record_failed_attempt`]: AccountStorePort::record_failed_attempt
#[async_trait]
pub trait AccountStorePort: Send + Sync {
    /// Write the single credential slot, replacing any prior value.
    async fn store_credentials(&self, email: &str, password: Password) -> bool;

    /// The current credential slot, or `None` if never set or unreadable.
    async fn get_credentials(&self) -> Option<Credential>;

    async fn clear_credentials(&self) -> bool;

    async fn store_profile(&self, profile: &UserProfile) -> bool;

    async fn get_profile(&self) -> Option<UserProfile>;

    async fn clear_profile(&self) -> bool;

    async fn store_draft(&self, draft: &RegistrationDraft) -> bool;

    async fn get_draft(&self) -> Option<RegistrationDraft>;

    async fn clear_draft(&self) -> bool;

    /// Record one failed login attempt and persist the new count,
    /// stamping the lockout start when the count reaches the threshold.
    ///
    /// Returns the new count, or `None` when the backend failed — the
    /// caller fails the whole login attempt in that case instead of
    /// under-counting.
    async fn record_failed_attempt(&self) -> Option<u32>;

    /// Current consecutive-failure count (0 if unset or unreadable).
    async fn failed_attempts(&self) -> u32;

    /// Clear both the counter and the lockout timestamp.
    async fn reset_failed_attempts(&self) -> bool;

    /// Whether login is currently rejected. Pure query: an expired
    /// window reads as unlocked even before [`reconcile_lockout`]
    /// persists the reset.
    ///
    /// [`reconcile_lockout`]: AccountStorePort::reconcile_lockout
    async fn is_locked_out(&self) -> bool;

    /// Seconds until the lockout window elapses, rounded up; 0 when not
    /// locked out. Monotonically non-increasing while locked.
    async fn remaining_lockout_secs(&self) -> u64;

    /// Persist the reset of an expired lockout window. Invoked by the
    /// login path and by each countdown tick; a no-op while the window
    /// is still running.
    async fn reconcile_lockout(&self) -> bool;

    async fn set_session_active(&self, active: bool) -> bool;

    /// True iff the session flag is set and a credential exists.
    async fn has_active_session(&self) -> bool;

    /// Full wipe: credentials, profile, draft, lockout state, and the
    /// session flag. Reserved for the administrative reset path; logout
    /// only clears the session flag.
    async fn clear_all(&self) -> bool;
}
