use pl_core::auth::{AuthError, UserProfile};
use serde::Serialize;

/// Result object for the register and login flows.
///
/// Rendered by the UI as-is: `error` is a stable machine-readable code,
/// `message` the human-readable text, and the lockout fields drive the
/// countdown display.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: Option<UserProfile>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub locked_out: bool,
    pub remaining_secs: Option<u64>,
}

impl AuthResponse {
    pub fn ok(user: UserProfile) -> Self {
        Self {
            success: true,
            user: Some(user),
            error: None,
            message: None,
            locked_out: false,
            remaining_secs: None,
        }
    }

    pub fn failure(error: &AuthError) -> Self {
        let (locked_out, remaining_secs) = match error {
            AuthError::LockedOut { remaining_secs } => (true, Some(*remaining_secs)),
            _ => (false, None),
        };
        Self {
            success: false,
            user: None,
            error: Some(error.code().to_string()),
            message: Some(error.to_string()),
            locked_out,
            remaining_secs,
        }
    }
}

/// Data transfer object for the session check.
#[derive(Debug, Clone, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}
