//! # pl-platform
//!
//! Platform-specific implementations for Passlock.
//!
//! This crate contains the adapters that talk to the operating system's
//! secure credential storage, and the file-based fallback for
//! environments without one.

pub mod capability;
mod credential_record;
pub mod file_keychain;
pub mod keychain;
pub mod secure_storage;

pub use file_keychain::FileKeychain;
pub use keychain::SystemKeychain;
pub use secure_storage::{
    create_default_keychain, create_default_keychain_in_app_data_root, KeychainFactoryError,
};
