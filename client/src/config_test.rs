use super::*;

// =============================================================
// parse_flag
// =============================================================

#[test]
fn parse_flag_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_flag(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_flag_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_flag(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_flag_rejects_unknown_words() {
    assert_eq!(parse_flag("maybe"), None);
    assert_eq!(parse_flag(""), None);
}

// =============================================================
// ClientConfig::from_values
// =============================================================

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.breed_limit, DEFAULT_BREED_LIMIT);
    assert_eq!(cfg.register_policy, RegisterPolicy::NavigateOnly);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some(" https://chat.example.test/api// "), None, None);
    assert_eq!(cfg.api_base_url, "https://chat.example.test/api");
}

#[test]
fn from_values_blank_api_url_falls_back_to_default() {
    let cfg = ClientConfig::from_values(Some("  "), None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_ignores_blank_dog_api_key() {
    assert_eq!(ClientConfig::from_values(None, Some("   "), None).dog_api_key, None);
    assert_eq!(
        ClientConfig::from_values(None, Some(" k-123 "), None).dog_api_key.as_deref(),
        Some("k-123")
    );
}

#[test]
fn from_values_register_policy_follows_flag() {
    assert_eq!(
        ClientConfig::from_values(None, None, Some("yes")).register_policy,
        RegisterPolicy::Authenticate
    );
    assert_eq!(
        ClientConfig::from_values(None, None, Some("off")).register_policy,
        RegisterPolicy::NavigateOnly
    );
    assert_eq!(
        ClientConfig::from_values(None, None, Some("garbage")).register_policy,
        RegisterPolicy::NavigateOnly
    );
}
