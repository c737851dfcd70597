//! Use case for registering the device account
//! 注册设备账户的用例

use std::sync::Arc;

use pl_core::auth::{AuthError, RegistrationForm};
use pl_core::ports::AccountStorePort;
use tracing::{info, info_span, warn, Instrument};

use super::dto::AuthResponse;

/// Use case for creating the single device account.
///
/// ## Behavior / 行为
/// - Refuses to overwrite a credential stored under the same email
/// - Writes the credential, then the profile; a failed profile write
///   rolls the credential back so no half-registered account lingers
/// - On success marks the session active and clears the saved draft
pub struct RegisterUser {
    store: Arc<dyn AccountStorePort>,
}

impl RegisterUser {
    /// Create a new RegisterUser use case.
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self, form: RegistrationForm) -> AuthResponse {
        let span = info_span!("usecase.register_user.execute");

        async move {
            if let Some(existing) = self.store.get_credentials().await {
                if existing.email == form.email {
                    return AuthResponse::failure(&AuthError::AlreadyExists);
                }
            }

            let profile = form.profile();

            if !self
                .store
                .store_credentials(&profile.email, form.password)
                .await
            {
                return AuthResponse::failure(&AuthError::CredentialStoreFailed);
            }

            if !self.store.store_profile(&profile).await {
                if !self.store.clear_credentials().await {
                    warn!("rollback of the credential slot failed");
                }
                return AuthResponse::failure(&AuthError::ProfileStoreFailed);
            }

            // Session flag and draft cleanup are soft: the account exists
            // either way.
            if !self.store.set_session_active(true).await {
                warn!("could not persist session flag after registration");
            }
            if !self.store.clear_draft().await {
                warn!("could not clear registration draft");
            }

            info!("registration completed");
            AuthResponse::ok(profile)
        }
        .instrument(span)
        .await
    }
}
