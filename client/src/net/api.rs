//! REST helpers for the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie (`credentials: include`) since the backend runs on another
//! origin.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; deciding whether a failure is
//! shown, swallowed or logged is left to the stores and pages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::expect_ok;
use super::types::{AccountMatch, LoginRequest, RegisterRequest};
#[cfg(feature = "hydrate")]
use super::types::SearchResponse;

pub(crate) const AUTH_PATH: &str = "/auth";
pub(crate) const LOGIN_PATH: &str = "/users/login";
pub(crate) const REGISTER_PATH: &str = "/users/register";
pub(crate) const USERS_PATH: &str = "/users";

/// Handle to the chat backend rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Ask the backend whether the current session cookie is valid via
    /// `GET /auth`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-200 answer and
    /// [`ApiError::Network`] when the request cannot complete.
    pub async fn probe_session(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(AUTH_PATH))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.endpoint(AUTH_PATH);
            Err(ApiError::Unavailable)
        }
    }

    /// Submit login credentials via `POST /users/login`. On success the
    /// backend sets the session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-200 answer and
    /// [`ApiError::Network`] when the request cannot complete.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        self.post_credentials(LOGIN_PATH, request).await
    }

    /// Create an account via `POST /users/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-200 answer and
    /// [`ApiError::Network`] when the request cannot complete.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post_credentials(REGISTER_PATH, request).await
    }

    /// Look up accounts whose username matches `term` via
    /// `GET /users?username={term}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-200 answer,
    /// [`ApiError::Decode`] for an unexpected body and [`ApiError::Network`]
    /// when the request cannot complete.
    pub async fn search_users(&self, term: &str) -> Result<Vec<AccountMatch>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(USERS_PATH))
                .query([("username", term)])
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_ok(resp.status())?;
            let body: SearchResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.users)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(USERS_PATH), term);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_credentials<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(path), body);
            Err(ApiError::Unavailable)
        }
    }
}
