//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

mod account_store;
mod clock;
pub mod keychain;
pub mod kv_store;

pub use account_store::AccountStorePort;
pub use clock::ClockPort;
pub use keychain::{CredentialKeychainPort, KeychainError};
pub use kv_store::{KeyValueStorePort, KvStoreError};
