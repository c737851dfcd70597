//! Credential & session store
//!
//! Composes the keychain credential slot, the plain key-value entries, and
//! a clock into the durable account state the use cases run against.
//! Every operation fails softly: backend faults are logged and surface as
//! `false` / `None`, never as a panic or an error the UI has to unwind.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use pl_core::auth::{Credential, LockoutState, Password, RegistrationDraft, UserProfile};
use pl_core::ports::{AccountStorePort, ClockPort, CredentialKeychainPort, KeyValueStorePort};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::keys;

pub struct AccountStore {
    keychain: Arc<dyn CredentialKeychainPort>,
    kv: Arc<dyn KeyValueStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl AccountStore {
    pub fn new(
        keychain: Arc<dyn CredentialKeychainPort>,
        kv: Arc<dyn KeyValueStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            keychain,
            kv,
            clock,
        }
    }

    async fn set_soft(&self, key: &str, value: &str) -> bool {
        match self.kv.set(key, value).await {
            Ok(()) => true,
            Err(e) => {
                warn!("writing {key} failed: {e}");
                false
            }
        }
    }

    async fn remove_soft(&self, key: &str) -> bool {
        match self.kv.remove(key).await {
            Ok(()) => true,
            Err(e) => {
                warn!("removing {key} failed: {e}");
                false
            }
        }
    }

    async fn store_json<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("encoding {key} failed: {e}");
                return false;
            }
        };
        self.set_soft(key, &json).await
    }

    async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("reading {key} failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("decoding {key} failed: {e}");
                None
            }
        }
    }

    /// Read the persisted lockout fields.
    ///
    /// `None` means the backend itself failed; an absent or corrupt entry
    /// reads as the zero state, matching the "0 if unset or unreadable"
    /// counter contract.
    async fn read_lockout(&self) -> Option<LockoutState> {
        let failed_raw = match self.kv.get(keys::FAILED_ATTEMPTS).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("reading {} failed: {e}", keys::FAILED_ATTEMPTS);
                return None;
            }
        };
        let locked_raw = match self.kv.get(keys::LOCKOUT_STARTED_AT).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("reading {} failed: {e}", keys::LOCKOUT_STARTED_AT);
                return None;
            }
        };

        let failed_attempts = failed_raw
            .and_then(|raw| match raw.parse::<u32>() {
                Ok(count) => Some(count),
                Err(_) => {
                    warn!("corrupt attempt counter {raw:?}, treating as 0");
                    None
                }
            })
            .unwrap_or(0);
        let locked_at_ms = locked_raw.and_then(|raw| match raw.parse::<i64>() {
            Ok(stamp) => Some(stamp),
            Err(_) => {
                warn!("corrupt lockout timestamp {raw:?}, ignoring");
                None
            }
        });

        Some(LockoutState {
            failed_attempts,
            locked_at_ms,
        })
    }

    async fn write_lockout(&self, state: LockoutState) -> bool {
        if state == LockoutState::default() {
            let counter = self.remove_soft(keys::FAILED_ATTEMPTS).await;
            let stamp = self.remove_soft(keys::LOCKOUT_STARTED_AT).await;
            return counter && stamp;
        }

        if !self
            .set_soft(keys::FAILED_ATTEMPTS, &state.failed_attempts.to_string())
            .await
        {
            return false;
        }
        match state.locked_at_ms {
            Some(stamp) => {
                self.set_soft(keys::LOCKOUT_STARTED_AT, &stamp.to_string())
                    .await
            }
            None => self.remove_soft(keys::LOCKOUT_STARTED_AT).await,
        }
    }
}

#[async_trait]
impl AccountStorePort for AccountStore {
    async fn store_credentials(&self, email: &str, password: Password) -> bool {
        let credential = Credential::new(email, password);
        match self.keychain.store(&credential) {
            Ok(()) => true,
            Err(e) => {
                warn!("storing credentials failed: {e}");
                false
            }
        }
    }

    async fn get_credentials(&self) -> Option<Credential> {
        match self.keychain.load() {
            Ok(slot) => slot,
            Err(e) => {
                warn!("reading credentials failed: {e}");
                None
            }
        }
    }

    async fn clear_credentials(&self) -> bool {
        match self.keychain.clear() {
            Ok(()) => true,
            Err(e) => {
                warn!("clearing credentials failed: {e}");
                false
            }
        }
    }

    async fn store_profile(&self, profile: &UserProfile) -> bool {
        self.store_json(keys::USER_PROFILE, profile).await
    }

    async fn get_profile(&self) -> Option<UserProfile> {
        self.load_json(keys::USER_PROFILE).await
    }

    async fn clear_profile(&self) -> bool {
        self.remove_soft(keys::USER_PROFILE).await
    }

    async fn store_draft(&self, draft: &RegistrationDraft) -> bool {
        self.store_json(keys::REGISTRATION_DRAFT, draft).await
    }

    async fn get_draft(&self) -> Option<RegistrationDraft> {
        self.load_json(keys::REGISTRATION_DRAFT).await
    }

    async fn clear_draft(&self) -> bool {
        self.remove_soft(keys::REGISTRATION_DRAFT).await
    }

    async fn record_failed_attempt(&self) -> Option<u32> {
        let state = self.read_lockout().await?;
        let next = state.record_failure(self.clock.now_ms());
        if self.write_lockout(next).await {
            Some(next.failed_attempts)
        } else {
            None
        }
    }

    async fn failed_attempts(&self) -> u32 {
        match self.read_lockout().await {
            Some(state) => state.reconciled(self.clock.now_ms()).failed_attempts,
            None => 0,
        }
    }

    async fn reset_failed_attempts(&self) -> bool {
        self.write_lockout(LockoutState::default()).await
    }

    async fn is_locked_out(&self) -> bool {
        match self.read_lockout().await {
            Some(state) => state.is_locked(self.clock.now_ms()),
            None => false,
        }
    }

    async fn remaining_lockout_secs(&self) -> u64 {
        match self.read_lockout().await {
            Some(state) => state.remaining_secs(self.clock.now_ms()),
            None => 0,
        }
    }

    async fn reconcile_lockout(&self) -> bool {
        let Some(state) = self.read_lockout().await else {
            return false;
        };
        if state.is_expired(self.clock.now_ms()) {
            self.write_lockout(LockoutState::default()).await
        } else {
            true
        }
    }

    async fn set_session_active(&self, active: bool) -> bool {
        if active {
            self.set_soft(keys::SESSION_ACTIVE, "true").await
        } else {
            self.remove_soft(keys::SESSION_ACTIVE).await
        }
    }

    async fn has_active_session(&self) -> bool {
        let flagged = match self.kv.get(keys::SESSION_ACTIVE).await {
            Ok(raw) => raw.as_deref() == Some("true"),
            Err(e) => {
                warn!("reading {} failed: {e}", keys::SESSION_ACTIVE);
                false
            }
        };
        // The flag alone cannot fabricate a session after a wipe.
        flagged && self.get_credentials().await.is_some()
    }

    async fn clear_all(&self) -> bool {
        // Keep going on failure so one bad entry does not strand the rest.
        let mut ok = self.clear_credentials().await;
        ok &= self.clear_profile().await;
        ok &= self.clear_draft().await;
        ok &= self.reset_failed_attempts().await;
        ok &= self.set_session_active(false).await;
        ok
    }
}
