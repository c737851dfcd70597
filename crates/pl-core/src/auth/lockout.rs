use serde::{Deserialize, Serialize};

/// Consecutive failed logins that engage the lockout.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// Fixed lockout window: 15 minutes.
pub const LOCKOUT_WINDOW_MS: i64 = 15 * 60 * 1000;

/// Failed-attempt counter and lockout window, as pure data.
///
/// Invariant: `locked_at_ms` is set iff `failed_attempts` has reached
/// [`MAX_FAILED_ATTEMPTS`] and the window has not yet elapsed relative to
/// the `now_ms` the caller evaluates it with. All transitions take the
/// current time as an argument so the machine stays deterministic under
/// test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutState {
    pub failed_attempts: u32,
    pub locked_at_ms: Option<i64>,
}

impl LockoutState {
    /// Record one failed login attempt at `now_ms`.
    ///
    /// An expired window is reconciled first, so the first failure after
    /// an old lockout starts a fresh count of 1. Reaching the threshold
    /// stamps `locked_at_ms`; further failures keep the original stamp.
    pub fn record_failure(self, now_ms: i64) -> Self {
        let state = self.reconciled(now_ms);
        let failed_attempts = state.failed_attempts.saturating_add(1);
        let locked_at_ms = if failed_attempts >= MAX_FAILED_ATTEMPTS {
            let stamp = state.locked_at_ms.unwrap_or(now_ms);
            #[cfg(feature = "tracing")]
            if state.locked_at_ms.is_none() {
                tracing::debug!(failed_attempts, "lockout engaged");
            }
            Some(stamp)
        } else {
            None
        };
        Self {
            failed_attempts,
            locked_at_ms,
        }
    }

    /// Whether login is currently rejected. Pure query.
    pub fn is_locked(&self, now_ms: i64) -> bool {
        match self.locked_at_ms {
            Some(locked_at_ms) => now_ms - locked_at_ms < LOCKOUT_WINDOW_MS,
            None => false,
        }
    }

    /// Seconds until the window elapses, rounded up; 0 when not locked.
    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        let Some(locked_at_ms) = self.locked_at_ms else {
            return 0;
        };
        let remaining_ms = LOCKOUT_WINDOW_MS - (now_ms - locked_at_ms);
        if remaining_ms <= 0 {
            0
        } else {
            (remaining_ms as u64).div_ceil(1000)
        }
    }

    /// Whether a stamped window has fully elapsed.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        matches!(self.locked_at_ms, Some(locked_at_ms) if now_ms - locked_at_ms >= LOCKOUT_WINDOW_MS)
    }

    /// Collapse an expired lockout back to the zero state.
    ///
    /// This is the explicit reconciliation step; reads stay pure and the
    /// persistence layer decides when to write the collapsed state back.
    pub fn reconciled(self, now_ms: i64) -> Self {
        if self.is_expired(now_ms) {
            Self::default()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000_000;

    fn failures(count: u32, now_ms: i64) -> LockoutState {
        (0..count).fold(LockoutState::default(), |state, _| {
            state.record_failure(now_ms)
        })
    }

    #[test]
    fn below_threshold_never_locks() {
        let state = failures(MAX_FAILED_ATTEMPTS - 1, T0);
        assert_eq!(state.failed_attempts, 4);
        assert_eq!(state.locked_at_ms, None);
        assert!(!state.is_locked(T0));
        assert_eq!(state.remaining_secs(T0), 0);
    }

    #[test]
    fn fifth_failure_engages_lockout() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);
        assert_eq!(state.failed_attempts, 5);
        assert_eq!(state.locked_at_ms, Some(T0));
        assert!(state.is_locked(T0));
        assert_eq!(state.remaining_secs(T0), 900);
    }

    #[test]
    fn further_failures_keep_original_stamp() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);
        let later = state.record_failure(T0 + 60_000);
        assert_eq!(later.locked_at_ms, Some(T0));
        assert_eq!(later.failed_attempts, 6);
    }

    #[test]
    fn remaining_secs_rounds_up_and_decreases() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);

        assert_eq!(state.remaining_secs(T0 + 1), 900);
        assert_eq!(state.remaining_secs(T0 + 1_000), 899);
        assert_eq!(state.remaining_secs(T0 + 899_001), 1);

        let mut previous = state.remaining_secs(T0);
        for elapsed_ms in (0..=LOCKOUT_WINDOW_MS).step_by(30_000) {
            let current = state.remaining_secs(T0 + elapsed_ms);
            assert!(current <= previous, "countdown must not increase");
            previous = current;
        }
    }

    #[test]
    fn window_boundary_unlocks_exactly_at_expiry() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);

        assert!(state.is_locked(T0 + LOCKOUT_WINDOW_MS - 1));
        assert_eq!(state.remaining_secs(T0 + LOCKOUT_WINDOW_MS - 1), 1);

        assert!(!state.is_locked(T0 + LOCKOUT_WINDOW_MS));
        assert_eq!(state.remaining_secs(T0 + LOCKOUT_WINDOW_MS), 0);
        assert!(state.is_expired(T0 + LOCKOUT_WINDOW_MS));
    }

    #[test]
    fn reconciled_collapses_only_expired_state() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);

        let still_locked = state.reconciled(T0 + LOCKOUT_WINDOW_MS - 1);
        assert_eq!(still_locked, state);

        let reset = state.reconciled(T0 + LOCKOUT_WINDOW_MS);
        assert_eq!(reset, LockoutState::default());
    }

    #[test]
    fn failure_after_expired_window_starts_fresh_count() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);
        let after_window = state.record_failure(T0 + LOCKOUT_WINDOW_MS);

        assert_eq!(after_window.failed_attempts, 1);
        assert_eq!(after_window.locked_at_ms, None);
        assert!(!after_window.is_locked(T0 + LOCKOUT_WINDOW_MS));
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = failures(MAX_FAILED_ATTEMPTS, T0);
        let json = serde_json::to_string(&state).unwrap();
        let restored: LockoutState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
