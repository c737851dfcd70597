use std::sync::Arc;

use pl_core::ports::AccountStorePort;
use tracing::{info_span, Instrument};

/// Use case for ending the active session.
///
/// Clears the session flag only: the credential and profile stay on the
/// device so the same user can log back in without re-registering. The
/// administrative full reset is [`WipeAccount`].
///
/// [`WipeAccount`]: super::WipeAccount
pub struct LogoutUser {
    store: Arc<dyn AccountStorePort>,
}

impl LogoutUser {
    /// Create a new LogoutUser use case.
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self { store }
    }

    /// Clear the session flag. Returns whether the flag was persisted.
    pub async fn execute(&self) -> bool {
        let span = info_span!("usecase.logout_user.execute");

        async move { self.store.set_session_active(false).await }
            .instrument(span)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_core::auth::{Password, UserProfile};
    use pl_infra::{AccountStore, ManualClock, MemoryKeyValueStore, MemoryKeychain};

    #[tokio::test]
    async fn logout_keeps_credential_and_profile() {
        let store = Arc::new(AccountStore::new(
            Arc::new(MemoryKeychain::new()),
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(ManualClock::new(0)),
        ));
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

        assert!(LogoutUser::new(store.clone()).execute().await);

        assert!(!store.has_active_session().await);
        assert!(store.get_credentials().await.is_some());
        assert!(store.get_profile().await.is_some());
    }
}
