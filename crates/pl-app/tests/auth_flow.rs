//! End-to-end account flow over the real store with in-memory backends.

use std::sync::Arc;

use pl_app::session::AuthSession;
use pl_core::auth::{Password, RegistrationDraft, RegistrationForm};
use pl_infra::{AccountStore, ManualClock, MemoryKeyValueStore, MemoryKeychain};

const T0: i64 = 1_700_000_000_000;

struct Harness {
    session: AuthSession,
    clock: Arc<ManualClock>,
}

fn harness() -> Harness {
    let clock = Arc::new(ManualClock::new(T0));
    let store = Arc::new(AccountStore::new(
        Arc::new(MemoryKeychain::new()),
        Arc::new(MemoryKeyValueStore::new()),
        clock.clone(),
    ));
    Harness {
        session: AuthSession::new(store),
        clock,
    }
}

fn john_doe() -> RegistrationForm {
    RegistrationForm {
        email: "a@b.com".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "1234567890".to_string(),
        password: Password::new("Passw0rd".to_string()),
    }
}

#[tokio::test]
async fn register_then_lock_out_then_recover() {
    let h = harness();

    // Registration succeeds and signs the user in.
    let registered = h.session.register(john_doe()).await;
    assert!(registered.success);
    assert_eq!(registered.user.as_ref().unwrap().email, "a@b.com");
    assert!(h.session.check_auth().await.authenticated);

    h.session.logout().await;

    // Four wrong passwords: invalid credentials, not yet locked.
    for _ in 0..4 {
        let response = h.session.login("a@b.com", "wrong").await;
        assert_eq!(response.error.as_deref(), Some("invalid_credentials"));
        assert!(!response.locked_out);
    }

    // The fifth trips the lockout with the full window remaining.
    let fifth = h.session.login("a@b.com", "wrong").await;
    assert!(fifth.locked_out);
    assert_eq!(fifth.remaining_secs, Some(900));

    // The correct password is rejected while locked, counter unchanged.
    let while_locked = h.session.login("a@b.com", "Passw0rd").await;
    assert!(while_locked.locked_out);
    assert_eq!(h.session.store().failed_attempts().await, 5);
    assert!(!h.session.check_auth().await.authenticated);

    // After the window the same pair signs in and the counter resets.
    h.clock.advance_secs(900);
    let recovered = h.session.login("a@b.com", "Passw0rd").await;
    assert!(recovered.success);
    assert_eq!(h.session.store().failed_attempts().await, 0);
    assert!(h.session.check_auth().await.authenticated);
}

#[tokio::test]
async fn logout_keeps_the_account_on_device() {
    let h = harness();
    h.session.register(john_doe()).await;

    h.session.logout().await;

    let store = h.session.store();
    assert!(store.get_credentials().await.is_some());
    assert!(store.get_profile().await.is_some());
    assert!(!h.session.check_auth().await.authenticated);

    // Logging back in needs no re-registration.
    assert!(h.session.login("a@b.com", "Passw0rd").await.success);
}

#[tokio::test]
async fn duplicate_registration_is_refused() {
    let h = harness();
    h.session.register(john_doe()).await;

    let mut second = john_doe();
    second.password = Password::new("Different1".to_string());
    let response = h.session.register(second).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("already_exists"));
}

#[tokio::test]
async fn interrupted_signup_resumes_from_the_draft() {
    let h = harness();
    let store = h.session.store();

    // The registration screen saves a draft on every edit.
    let draft = RegistrationDraft {
        email: Some("a@b.com".to_string()),
        first_name: Some("John".to_string()),
        last_name: None,
        phone_number: None,
    };
    assert!(store.store_draft(&draft).await);

    // After a restart the draft comes back verbatim, and never holds a
    // password.
    assert_eq!(store.get_draft().await, Some(draft));

    // Completing the registration clears it.
    h.session.register(john_doe()).await;
    assert!(store.get_draft().await.is_none());
}

#[tokio::test]
async fn wipe_is_wider_than_logout() {
    let h = harness();
    h.session.register(john_doe()).await;

    assert!(h.session.wipe().await);

    let store = h.session.store();
    assert!(store.get_credentials().await.is_none());
    assert!(store.get_profile().await.is_none());
    assert!(!h.session.check_auth().await.authenticated);

    // The email is registerable again after a wipe.
    assert!(h.session.register(john_doe()).await.success);
}
