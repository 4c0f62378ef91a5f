//! Client for the public dog breed API.
//!
//! The breed listing is decoration around the chat core: failures only
//! affect the breeds page and never touch session state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "dogs_test.rs"]
mod dogs_test;

use super::error::ApiError;
use super::types::Breed;
use crate::config::ClientConfig;

#[cfg(feature = "hydrate")]
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DogApiClient {
    base_url: String,
    api_key: Option<String>,
}

impl DogApiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { base_url: base_url.into(), api_key }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.dog_api_base_url.clone(), config.dog_api_key.clone())
    }

    pub(crate) fn breeds_endpoint(&self, limit: u32) -> String {
        format!("{}/breeds?limit={limit}", self.base_url.trim_end_matches('/'))
    }

    /// Fetch up to `limit` breeds via `GET /breeds?limit={limit}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-200 answer,
    /// [`ApiError::Decode`] for an unexpected body and [`ApiError::Network`]
    /// when the request cannot complete.
    pub async fn fetch_breeds(&self, limit: u32) -> Result<Vec<Breed>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.breeds_endpoint(limit));
            if let Some(key) = &self.api_key {
                request = request.header(API_KEY_HEADER, key);
            }
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            super::error::expect_ok(resp.status())?;
            resp.json::<Vec<Breed>>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.breeds_endpoint(limit), &self.api_key);
            Err(ApiError::Unavailable)
        }
    }
}
