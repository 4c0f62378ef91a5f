//! Login and register submit flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the form fields and navigation; this module owns what a
//! submission means: input validation, the 200-only success rule, and which
//! session mutation happens before the page moves into `/chat`.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use std::future::Future;

use crate::config::RegisterPolicy;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::SessionStore;

/// Protected route entered after a successful login or registration.
pub const CHAT_ROUTE: &str = "/chat";
pub const LOGIN_ROUTE: &str = "/login";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Invalid(&'static str),
    /// The backend answered with a non-200 status.
    #[error("request rejected with status {0}")]
    Rejected(u16),
    #[error("could not reach the server: {0}")]
    Network(String),
}

impl From<ApiError> for EntryError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) => Self::Rejected(status),
            ApiError::Network(msg) | ApiError::Decode(msg) => Self::Network(msg),
            ApiError::Unavailable => Self::Network(ApiError::Unavailable.to_string()),
        }
    }
}

/// Trim and require both login fields.
///
/// # Errors
///
/// Returns [`EntryError::Invalid`] when a field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, EntryError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(EntryError::Invalid("Enter both email and password."));
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Trim and check the registration fields against the backend's rules:
/// every field required, alphanumeric username, password of at least
/// [`MIN_PASSWORD_LEN`] characters.
///
/// # Errors
///
/// Returns [`EntryError::Invalid`] describing the first failed rule.
pub fn validate_register(email: &str, username: &str, password: &str) -> Result<RegisterRequest, EntryError> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() || password.is_empty() {
        return Err(EntryError::Invalid("Enter email, username and password."));
    }
    if !username.chars().all(char::is_alphanumeric) {
        return Err(EntryError::Invalid("Username may only contain letters and digits."));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(EntryError::Invalid("Password must be at least 8 characters."));
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Await a login submission; on success authenticate the session and return
/// the route to navigate to.
///
/// # Errors
///
/// Returns the submission failure; the session is left untouched.
pub async fn complete_login<F>(session: SessionStore, submit: F) -> Result<&'static str, EntryError>
where
    F: Future<Output = Result<(), ApiError>>,
{
    submit.await?;
    session.mark_authenticated();
    Ok(CHAT_ROUTE)
}

/// Await a registration submission; on success apply `policy` and return the
/// route to navigate to.
///
/// # Errors
///
/// Returns the submission failure; the session is left untouched.
pub async fn complete_register<F>(
    session: SessionStore,
    policy: RegisterPolicy,
    submit: F,
) -> Result<&'static str, EntryError>
where
    F: Future<Output = Result<(), ApiError>>,
{
    submit.await?;
    match policy {
        RegisterPolicy::Authenticate => session.mark_authenticated(),
        RegisterPolicy::NavigateOnly => {}
    }
    Ok(CHAT_ROUTE)
}
