//! Passlock Application Layer
//!
//! This crate contains the account use cases, the session context the UI
//! runs against, and the lockout countdown monitor.

pub mod bootstrap;
pub mod lockout_monitor;
pub mod session;
pub mod usecases;

pub use lockout_monitor::{LockoutMonitor, LockoutStatus, LockoutWatch};
pub use session::AuthSession;
pub use usecases::{AuthResponse, AuthStatus};
