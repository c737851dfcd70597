//! Use case for logging into the device account
//! 登录设备账户的用例

use std::sync::Arc;

use pl_core::auth::AuthError;
use pl_core::ports::AccountStorePort;
use tracing::{info, info_span, warn, Instrument};

use super::dto::AuthResponse;

/// Use case for verifying the submitted credential pair.
///
/// ## Behavior / 行为
/// - Reconciles an expired lockout, then rejects while one is running
/// - A missing credential and a wrong password take the same path:
///   same counting, same lockout re-check, same message — nothing
///   leaks whether an account exists
/// - A match resets the counter and marks the session active
pub struct LoginUser {
    store: Arc<dyn AccountStorePort>,
}

impl LoginUser {
    /// Create a new LoginUser use case.
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self, email: &str, password: &str) -> AuthResponse {
        let span = info_span!("usecase.login_user.execute");

        async move {
            if !self.store.reconcile_lockout().await {
                warn!("lockout reconciliation failed, continuing with persisted state");
            }
            if self.store.is_locked_out().await {
                let remaining_secs = self.store.remaining_lockout_secs().await;
                return AuthResponse::failure(&AuthError::LockedOut { remaining_secs });
            }

            let matched = match self.store.get_credentials().await {
                Some(stored) => stored.matches(email, password),
                // Indistinguishable from a wrong password on purpose.
                None => false,
            };
            if !matched {
                return self.failed_attempt().await;
            }

            if !self.store.reset_failed_attempts().await {
                warn!("could not reset attempt counter after successful login");
            }
            if !self.store.set_session_active(true).await {
                warn!("could not persist session flag after login");
            }

            match self.store.get_profile().await {
                Some(profile) => {
                    info!("login succeeded");
                    AuthResponse::ok(profile)
                }
                None => AuthResponse::failure(&AuthError::ProfileMissing),
            }
        }
        .instrument(span)
        .await
    }

    async fn failed_attempt(&self) -> AuthResponse {
        if self.store.record_failed_attempt().await.is_none() {
            // A rate limit that cannot be persisted must fail the attempt,
            // not under-count it.
            return AuthResponse::failure(&AuthError::Unexpected(
                "failed to record login attempt".to_string(),
            ));
        }
        if self.store.is_locked_out().await {
            let remaining_secs = self.store.remaining_lockout_secs().await;
            return AuthResponse::failure(&AuthError::LockedOut { remaining_secs });
        }
        AuthResponse::failure(&AuthError::InvalidCredentials)
    }
}
