//! Account use cases
//!
//! One use case per user-visible operation. Each runs against the
//! [`AccountStorePort`] and recovers every failure into a result DTO the
//! UI can render directly; nothing here panics or returns an error type.
//!
//! [`AccountStorePort`]: pl_core::ports::AccountStorePort

pub mod check_auth;
pub mod dto;
pub mod login_user;
pub mod logout_user;
pub mod register_user;
pub mod wipe_account;

pub use check_auth::CheckAuth;
pub use dto::{AuthResponse, AuthStatus};
pub use login_user::LoginUser;
pub use logout_user::LogoutUser;
pub use register_user::RegisterUser;
pub use wipe_account::WipeAccount;
