//! Composition root for the account layer.
//!
//! Wires the platform keychain, the file-backed key-value store, and the
//! system clock into an [`AuthSession`] the UI shell can hold for the
//! process lifetime.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use pl_infra::{AccountStore, FileKeyValueStore, SystemClock};
use pl_platform::create_default_keychain_in_app_data_root;

use crate::session::AuthSession;

/// Build the session context over the given app data root.
///
/// The keychain lands in the OS secure store where one exists, or under
/// `<app_data_root>/keychain/` on platforms without one; the key-value
/// entries live under `<app_data_root>/kv/`.
pub fn build_auth_session(app_data_root: PathBuf) -> Result<AuthSession> {
    let keychain = create_default_keychain_in_app_data_root(app_data_root.clone())
        .context("initialize credential keychain")?;
    let kv = Arc::new(FileKeyValueStore::with_base_dir(app_data_root.join("kv")));
    let store = Arc::new(AccountStore::new(keychain, kv, Arc::new(SystemClock)));
    Ok(AuthSession::new(store))
}
