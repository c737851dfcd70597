use thiserror::Error;

use crate::auth::Credential;

/// Keychain errors.
///
/// 钥匙串错误类型。
#[derive(Debug, Error)]
pub enum KeychainError {
    /// Secure storage is unavailable on this platform.
    ///
    /// 平台不支持或不可用。
    #[error("keychain unavailable: {0}")]
    Unavailable(String),

    /// Access was denied by the platform (permissions/ACL, device locked).
    ///
    /// 平台权限拒绝访问，或设备处于锁定状态。
    #[error("keychain access denied: {0}")]
    PermissionDenied(String),

    /// Stored data is corrupt or invalid.
    ///
    /// 存储数据损坏或无效。
    #[error("keychain data corrupt: {0}")]
    Corrupt(String),

    /// Other keychain failures.
    ///
    /// 其它钥匙串失败。
    #[error("keychain operation failed: {0}")]
    Other(String),
}

/// Single-slot credential keychain port.
///
/// The platform keeps exactly one (email, password) pair under a fixed
/// service identifier, encrypted at rest and accessible only while the
/// device is unlocked.
///
/// Error semantics:
/// - `load` returns `Ok(None)` when no credential was ever stored
/// - `store` overwrites any prior slot (idempotent at the backend level)
/// - `clear` is idempotent: clearing an empty slot succeeds
pub trait CredentialKeychainPort: Send + Sync {
    fn load(&self) -> Result<Option<Credential>, KeychainError>;

    fn store(&self, credential: &Credential) -> Result<(), KeychainError>;

    fn clear(&self) -> Result<(), KeychainError>;
}

#[cfg(test)]
mockall::mock! {
    pub Keychain {}

    impl CredentialKeychainPort for Keychain {
        fn load(&self) -> Result<Option<Credential>, KeychainError>;
        fn store(&self, credential: &Credential) -> Result<(), KeychainError>;
        fn clear(&self) -> Result<(), KeychainError>;
    }
}
