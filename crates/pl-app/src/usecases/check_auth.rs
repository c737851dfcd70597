use std::sync::Arc;

use pl_core::ports::AccountStorePort;
use tracing::{info_span, Instrument};

use super::dto::AuthStatus;

/// Use case for reporting the current session state.
///
/// Run once at app start to decide the initial screen, and again whenever
/// the UI needs to re-check. A session with a missing profile is still
/// authenticated — the payload is simply absent.
pub struct CheckAuth {
    store: Arc<dyn AccountStorePort>,
}

impl CheckAuth {
    /// Create a new CheckAuth use case.
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self { store }
    }

    /// Report whether a session is active, with the profile when present.
    pub async fn execute(&self) -> AuthStatus {
        let span = info_span!("usecase.check_auth.execute");

        async move {
            if !self.store.has_active_session().await {
                return AuthStatus {
                    authenticated: false,
                    user: None,
                };
            }

            AuthStatus {
                authenticated: true,
                user: self.store.get_profile().await,
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_core::auth::{Password, UserProfile};
    use pl_infra::{AccountStore, ManualClock, MemoryKeyValueStore, MemoryKeychain};

    fn store() -> Arc<AccountStore> {
        Arc::new(AccountStore::new(
            Arc::new(MemoryKeychain::new()),
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(ManualClock::new(0)),
        ))
    }

    #[tokio::test]
    async fn no_session_reports_unauthenticated() {
        let status = CheckAuth::new(store()).execute().await;
        assert!(!status.authenticated);
        assert!(status.user.is_none());
    }

    #[tokio::test]
    async fn active_session_reports_profile() {
        let store = store();
        store
            .store_credentials("a@b.com", Password::new("pw".to_string()))
            .await;
        store
            .store_profile(&UserProfile {
                email: "a@b.com".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                phone_number: "1234567890".to_string(),
            })
            .await;
        store.set_session_active(true).await;

        let status = CheckAuth::new(store).execute().await;

        assert!(status.authenticated);
        assert_eq!(status.user.unwrap().email, "a@b.com");
    }

    #[tokio::test]
    async fn missing_profile_is_tolerated() {
        let store = store();
        store
            .store_credentials("a@b.com", Password::new("pw".to_string()))
            .await;
        store.set_session_active(true).await;

        let status = CheckAuth::new(store).execute().await;

        assert!(status.authenticated);
        assert!(status.user.is_none());
    }
}
