//! Periodic lockout countdown.
//!
//! The login screen shows a live countdown while the account is locked.
//! The monitor polls the store on a fixed interval, reconciles an expired
//! window, and publishes the status on a watch channel. The returned
//! handle aborts the poll task on `stop()` and on drop, so a dismissed
//! screen cannot leak the timer.

use std::sync::Arc;
use std::time::Duration;

use pl_core::ports::AccountStorePort;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LockoutStatus {
    pub locked_out: bool,
    pub remaining_secs: u64,
}

pub struct LockoutMonitor {
    store: Arc<dyn AccountStorePort>,
    period: Duration,
}

impl LockoutMonitor {
    /// Create a monitor with the default one-second poll.
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self::with_period(store, Duration::from_secs(1))
    }

    pub fn with_period(store: Arc<dyn AccountStorePort>, period: Duration) -> Self {
        Self { store, period }
    }

    /// One reconciled reading, without starting the poll.
    pub async fn snapshot(&self) -> LockoutStatus {
        poll(&self.store).await
    }

    /// Start polling. The first value is available immediately.
    pub async fn start(&self) -> LockoutWatch {
        let initial = poll(&self.store).await;
        let (tx, rx) = watch::channel(initial);

        let store = self.store.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; the initial channel
            // value already covers it.
            interval.tick().await;
            loop {
                interval.tick().await;
                let status = poll(&store).await;
                if tx.send(status).is_err() {
                    debug!("lockout watch dropped, stopping poll");
                    break;
                }
            }
        });

        LockoutWatch {
            rx,
            abort: handle.abort_handle(),
        }
    }
}

async fn poll(store: &Arc<dyn AccountStorePort>) -> LockoutStatus {
    if !store.reconcile_lockout().await {
        debug!("lockout reconciliation failed on tick");
    }
    LockoutStatus {
        locked_out: store.is_locked_out().await,
        remaining_secs: store.remaining_lockout_secs().await,
    }
}

/// Receiver half of a running monitor.
pub struct LockoutWatch {
    rx: watch::Receiver<LockoutStatus>,
    abort: AbortHandle,
}

impl LockoutWatch {
    /// The most recently published status.
    pub fn status(&self) -> LockoutStatus {
        *self.rx.borrow()
    }

    /// Wait for the next published status. Returns `false` once the poll
    /// task is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    pub fn stop(&self) {
        self.abort.abort();
    }
}

impl Drop for LockoutWatch {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
