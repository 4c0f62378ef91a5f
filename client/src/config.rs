//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so settings are
//! captured with `option_env!` when the crate is compiled and provided to the
//! component tree via context from `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_DOG_API_BASE_URL: &str = "https://api.thedogapi.com/v1";
pub const DEFAULT_BREED_LIMIT: u32 = 10;

/// What a successful registration does to the session.
///
/// The backend may or may not issue a session cookie on registration, so the
/// choice is explicit rather than inferred.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterPolicy {
    /// Navigate into the protected area and let the route guard decide.
    #[default]
    NavigateOnly,
    /// Mark the session authenticated before navigating, like login does.
    Authenticate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub dog_api_base_url: String,
    pub dog_api_key: Option<String>,
    pub breed_limit: u32,
    pub register_policy: RegisterPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            dog_api_base_url: DEFAULT_DOG_API_BASE_URL.to_owned(),
            dog_api_key: None,
            breed_limit: DEFAULT_BREED_LIMIT,
            register_policy: RegisterPolicy::NavigateOnly,
        }
    }
}

impl ClientConfig {
    /// Build the config from variables present when the crate was compiled.
    ///
    /// - `PAWCHAT_API_URL`: chat backend base URL (default `http://localhost:8000`)
    /// - `PAWCHAT_DOG_API_KEY`: `x-api-key` value for the dog API
    /// - `PAWCHAT_REGISTER_AUTO_LOGIN`: `1/true/yes/on` selects
    ///   [`RegisterPolicy::Authenticate`]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PAWCHAT_API_URL"),
            option_env!("PAWCHAT_DOG_API_KEY"),
            option_env!("PAWCHAT_REGISTER_AUTO_LOGIN"),
        )
    }

    pub(crate) fn from_values(
        api_url: Option<&str>,
        dog_api_key: Option<&str>,
        register_auto_login: Option<&str>,
    ) -> Self {
        let api_base_url = api_url
            .map(normalize_base_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let dog_api_key = dog_api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned);
        let register_policy = match register_auto_login.and_then(parse_flag) {
            Some(true) => RegisterPolicy::Authenticate,
            Some(false) | None => RegisterPolicy::NavigateOnly,
        };

        Self {
            api_base_url,
            dog_api_key,
            register_policy,
            ..Self::default()
        }
    }
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
