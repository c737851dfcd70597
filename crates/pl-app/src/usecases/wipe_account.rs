use std::sync::Arc;

use pl_core::ports::AccountStorePort;
use tracing::{info, info_span, Instrument};

/// Administrative full reset.
///
/// Removes the credential, the profile, the registration draft, the
/// lockout state, and the session flag. This is the second, wider
/// "clear everything" path — ordinary logout never touches account data.
pub struct WipeAccount {
    store: Arc<dyn AccountStorePort>,
}

impl WipeAccount {
    /// Create a new WipeAccount use case.
    pub fn new(store: Arc<dyn AccountStorePort>) -> Self {
        Self { store }
    }

    /// Wipe all durable account state. Returns whether every entry was
    /// removed.
    pub async fn execute(&self) -> bool {
        let span = info_span!("usecase.wipe_account.execute");

        async move {
            let wiped = self.store.clear_all().await;
            info!(wiped, "account wipe finished");
            wiped
        }
        .instrument(span)
        .await
    }
}
