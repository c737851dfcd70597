use std::fmt;
use std::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A password that must never be logged, cloned, or serialized.
///
/// 密码字符串：
/// - 不可 Clone
/// - 不可 Serialize / Deserialize
/// - 不可 Debug / Display 输出真实内容
/// - Drop 时清零内存
/// - 比较必须走常数时间
pub struct Password {
    inner: String,
}

impl Password {
    /// Create a new Password.
    ///
    /// 创建一个密码值。
    pub fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Borrow the inner secret as &str.
    ///
    /// 只允许通过借用方式读取。
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Consume and return the inner String.
    ///
    /// 显式消耗，用于必须转交所有权的场景（谨慎使用）。
    pub fn into_inner(mut self) -> String {
        let mut tmp = String::new();
        std::mem::swap(&mut self.inner, &mut tmp);
        tmp
    }

    /// Constant-time comparison against a submitted password.
    ///
    /// Length差异会立即返回 false，不泄露内容。
    pub fn ct_eq(&self, candidate: &str) -> bool {
        self.inner.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

/* ===========================
 * Trait implementations
 * ===========================
 */

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_redact_content() {
        let password = Password::new("Passw0rd".to_string());
        assert_eq!(format!("{:?}", password), "[REDACTED]");
        assert_eq!(format!("{}", password), "[REDACTED]");
    }

    #[test]
    fn expose_returns_inner_value() {
        let password = Password::new("Passw0rd".to_string());
        assert_eq!(password.expose(), "Passw0rd");
    }

    #[test]
    fn ct_eq_matches_equal_values() {
        let password = Password::new("Passw0rd".to_string());
        assert!(password.ct_eq("Passw0rd"));
    }

    #[test]
    fn ct_eq_rejects_different_values() {
        let password = Password::new("Passw0rd".to_string());
        assert!(!password.ct_eq("passw0rd"));
        assert!(!password.ct_eq("Passw0rd "));
        assert!(!password.ct_eq(""));
    }

    #[test]
    fn into_inner_hands_over_ownership() {
        let password = Password::new("Passw0rd".to_string());
        assert_eq!(password.into_inner(), "Passw0rd");
    }
}
