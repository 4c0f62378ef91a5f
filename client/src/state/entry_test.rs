use super::*;
use crate::net::api::ApiClient;
use futures::executor::block_on;

fn session() -> SessionStore {
    SessionStore::new(ApiClient::new("http://localhost:8000"))
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_login_trims_email_and_requires_both() {
    assert_eq!(
        validate_login("  a@b.com ", "secret"),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() })
    );
    assert_eq!(validate_login("   ", "secret"), Err(EntryError::Invalid("Enter both email and password.")));
    assert_eq!(validate_login("a@b.com", ""), Err(EntryError::Invalid("Enter both email and password.")));
}

#[test]
fn validate_login_keeps_password_whitespace() {
    let request = validate_login("a@b.com", " pass ").unwrap();
    assert_eq!(request.password, " pass ");
}

#[test]
fn validate_register_accepts_valid_input() {
    assert_eq!(
        validate_register(" a@b.com ", " anna ", "longenough"),
        Ok(RegisterRequest {
            email: "a@b.com".to_owned(),
            username: "anna".to_owned(),
            password: "longenough".to_owned(),
        })
    );
}

#[test]
fn validate_register_requires_all_fields() {
    assert_eq!(
        validate_register("a@b.com", "", "longenough"),
        Err(EntryError::Invalid("Enter email, username and password."))
    );
}

#[test]
fn validate_register_rejects_non_alphanumeric_username() {
    assert_eq!(
        validate_register("a@b.com", "an na", "longenough"),
        Err(EntryError::Invalid("Username may only contain letters and digits."))
    );
}

#[test]
fn validate_register_rejects_short_password() {
    assert_eq!(
        validate_register("a@b.com", "anna", "short"),
        Err(EntryError::Invalid("Password must be at least 8 characters."))
    );
}

// =============================================================
// EntryError
// =============================================================

#[test]
fn entry_error_from_api_error() {
    assert_eq!(EntryError::from(ApiError::Status(401)), EntryError::Rejected(401));
    assert_eq!(
        EntryError::from(ApiError::Network("refused".to_owned())),
        EntryError::Network("refused".to_owned())
    );
    assert_eq!(
        EntryError::from(ApiError::Unavailable),
        EntryError::Network("not available on server".to_owned())
    );
}

// =============================================================
// Login flow
// =============================================================

#[test]
fn login_success_authenticates_and_targets_chat() {
    let session = session();
    let target = block_on(complete_login(session, async { Ok(()) }));
    assert_eq!(target, Ok(CHAT_ROUTE));
    assert!(session.snapshot_untracked().is_authenticated());
}

#[test]
fn login_rejection_leaves_session_untouched() {
    let session = session();
    let target = block_on(complete_login(session, async { Err(ApiError::Status(401)) }));
    assert_eq!(target, Err(EntryError::Rejected(401)));
    assert!(!session.snapshot_untracked().is_authenticated());
}

#[test]
fn login_network_failure_leaves_session_untouched() {
    let session = session();
    let target = block_on(complete_login(session, async { Err(ApiError::Network("offline".to_owned())) }));
    assert_eq!(target, Err(EntryError::Network("offline".to_owned())));
    assert!(!session.snapshot_untracked().is_authenticated());
}

// =============================================================
// Register flow
// =============================================================

#[test]
fn register_navigate_only_does_not_authenticate() {
    let session = session();
    let target = block_on(complete_register(session, RegisterPolicy::NavigateOnly, async { Ok(()) }));
    assert_eq!(target, Ok(CHAT_ROUTE));
    assert!(!session.snapshot_untracked().is_authenticated());
}

#[test]
fn register_authenticate_policy_marks_session() {
    let session = session();
    let target = block_on(complete_register(session, RegisterPolicy::Authenticate, async { Ok(()) }));
    assert_eq!(target, Ok(CHAT_ROUTE));
    assert!(session.snapshot_untracked().is_authenticated());
}

#[test]
fn register_rejection_ignores_policy() {
    let session = session();
    let target = block_on(complete_register(session, RegisterPolicy::Authenticate, async {
        Err(ApiError::Status(400))
    }));
    assert_eq!(target, Err(EntryError::Rejected(400)));
    assert!(!session.snapshot_untracked().is_authenticated());
}
