use super::*;

#[test]
fn expect_ok_accepts_only_200() {
    assert_eq!(expect_ok(200), Ok(()));
    assert_eq!(expect_ok(201), Err(ApiError::Status(201)));
    assert_eq!(expect_ok(204), Err(ApiError::Status(204)));
    assert_eq!(expect_ok(401), Err(ApiError::Status(401)));
    assert_eq!(expect_ok(500), Err(ApiError::Status(500)));
}

#[test]
fn status_is_only_present_for_completed_requests() {
    assert_eq!(ApiError::Status(403).status(), Some(403));
    assert_eq!(ApiError::Network("refused".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn display_messages_are_human_readable() {
    assert_eq!(ApiError::Status(401).to_string(), "unexpected status 401");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network failure: connection refused"
    );
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
