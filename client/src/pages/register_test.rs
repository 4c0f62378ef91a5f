use super::*;

#[test]
fn invalid_input_message_is_shown_verbatim() {
    let err = EntryError::Invalid("Password must be at least 8 characters.");
    assert_eq!(register_failure_message(&err), "Password must be at least 8 characters.");
}

#[test]
fn conflict_reads_as_taken() {
    assert_eq!(
        register_failure_message(&EntryError::Rejected(400)),
        "That email or username is already taken."
    );
    assert_eq!(
        register_failure_message(&EntryError::Rejected(409)),
        "That email or username is already taken."
    );
}

#[test]
fn other_failures_are_distinguished() {
    assert_eq!(register_failure_message(&EntryError::Rejected(201)), "Sign up failed (status 201).");
    assert_eq!(
        register_failure_message(&EntryError::Network("offline".to_owned())),
        "Could not reach the server. Try again."
    );
}
