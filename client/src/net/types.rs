//! Wire DTOs for the chat backend and the dog API.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON bodies exactly; request bodies serialize to
//! the shapes the backend decodes and response types tolerate the `null`
//! arrays an empty result produces.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One account returned by the username search endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMatch {
    pub id: i64,
    pub username: String,
}

/// Body of `GET /users?username=...`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub users: Vec<AccountMatch>,
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// A breed record from the dog API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Breed {
    #[serde(deserialize_with = "deserialize_id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<BreedImage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BreedImage {
    pub url: String,
}

impl Breed {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.url.as_str())
    }
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
