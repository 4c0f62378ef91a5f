use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let api = ApiClient::new("http://localhost:8000");
    assert_eq!(api.endpoint(AUTH_PATH), "http://localhost:8000/auth");
    assert_eq!(api.endpoint(LOGIN_PATH), "http://localhost:8000/users/login");
    assert_eq!(api.endpoint(REGISTER_PATH), "http://localhost:8000/users/register");
    assert_eq!(api.endpoint(USERS_PATH), "http://localhost:8000/users");
}

#[test]
fn endpoint_tolerates_trailing_slash_in_base() {
    let api = ApiClient::new("https://chat.example.test/");
    assert_eq!(api.endpoint(AUTH_PATH), "https://chat.example.test/auth");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    use futures::executor::block_on;

    let api = ApiClient::new("http://localhost:8000");
    assert_eq!(block_on(api.probe_session()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.search_users("ann")), Err(ApiError::Unavailable));
    let login = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(block_on(api.login(&login)), Err(ApiError::Unavailable));
    let register = RegisterRequest {
        email: "a@b.com".to_owned(),
        username: "anna".to_owned(),
        password: "password1".to_owned(),
    };
    assert_eq!(block_on(api.register(&register)), Err(ApiError::Unavailable));
}
