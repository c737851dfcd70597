//! Session context with an explicit lifecycle.
//!
//! The UI holds one `AuthSession` for the whole process: constructed at
//! startup, hydrated once via [`AuthSession::initialize`], and mutated
//! only by the account operations below. No ambient singletons — the
//! store is injected and the context is passed where it is needed.

use std::sync::Arc;

use log::info;
use pl_core::auth::{RegistrationForm, UserProfile};
use pl_core::ports::AccountStorePort;
use tokio::sync::RwLock;

use crate::usecases::{
    AuthResponse, AuthStatus, CheckAuth, LoginUser, LogoutUser, RegisterUser, WipeAccount,
};

pub struct AuthSession {
    store: Arc<dyn AccountStorePort>,
    current_user: RwLock<Option<UserProfile>>,
}

impl AuthSession {
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self {
            store,
            current_user: RwLock::new(None),
        }
    }

    /// The underlying store, for collaborators like the lockout monitor
    /// and the registration screen's draft persistence.
    pub fn store(&self) -> Arc<dyn AccountStorePort> {
        self.store.clone()
    }

    /// Hydrate the in-memory snapshot from durable state. Called once at
    /// app start.
    pub async fn initialize(&self) -> AuthStatus {
        let status = CheckAuth::new(self.store.clone()).execute().await;
        *self.current_user.write().await = status.user.clone();
        info!(
            "session initialized (authenticated: {})",
            status.authenticated
        );
        status
    }

    pub async fn register(&self, form: RegistrationForm) -> AuthResponse {
        let response = RegisterUser::new(self.store.clone()).execute(form).await;
        if response.success {
            *self.current_user.write().await = response.user.clone();
        }
        response
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthResponse {
        let response = LoginUser::new(self.store.clone())
            .execute(email, password)
            .await;
        if response.success {
            *self.current_user.write().await = response.user.clone();
        }
        response
    }

    pub async fn logout(&self) -> bool {
        let cleared = LogoutUser::new(self.store.clone()).execute().await;
        *self.current_user.write().await = None;
        cleared
    }

    pub async fn check_auth(&self) -> AuthStatus {
        let status = CheckAuth::new(self.store.clone()).execute().await;
        *self.current_user.write().await = status.user.clone();
        status
    }

    pub async fn wipe(&self) -> bool {
        let wiped = WipeAccount::new(self.store.clone()).execute().await;
        *self.current_user.write().await = None;
        wiped
    }

    /// Snapshot of the signed-in profile, as last observed by one of the
    /// operations above.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.current_user.read().await.clone()
    }
}
