//! Tests against the real Paymill test-mode API.
//!
//! These are opt-in and require a test-mode private key:
//!
//! ```bash
//! export PAYMILL_PRIVATE_KEY=<test private key>
//! cargo test -p paymill-lib --features integration-tests --test sandbox -- --ignored
//! ```

#![cfg(feature = "integration-tests")]

use paymill_lib::{ApiError, Paymill};

fn sandbox() -> Paymill {
    Paymill::from_env().expect("PAYMILL_PRIVATE_KEY must hold a test-mode key")
}

#[test]
#[ignore = "requires PAYMILL_PRIVATE_KEY"]
fn test_client_round_trip() {
    let paymill = sandbox();
    let email = format!("sandbox+{}@example.com", std::process::id());

    let created = paymill.clients().create(&email, Some("sandbox run")).unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let fetched = paymill.clients().details(&id).unwrap();
    assert_eq!(fetched["data"]["email"], email.as_str());

    let updated = paymill.clients().update(&id, &email, None).unwrap();
    assert!(updated["data"]["description"].is_null());

    paymill.clients().remove(&id).unwrap();
}

#[test]
#[ignore = "requires PAYMILL_PRIVATE_KEY"]
fn test_list_offers_by_creation() {
    let offers = sandbox().offers().list(Some("created_at"), None).unwrap();
    assert!(offers["data"].is_array());
}

#[test]
#[ignore = "requires PAYMILL_PRIVATE_KEY"]
fn test_unknown_id_is_not_found() {
    let err = sandbox()
        .transactions()
        .details("tran_0000000000000000000000")
        .unwrap_err();
    assert!(matches!(err.api_error(), Some(ApiError::NotFound(_))));
}
