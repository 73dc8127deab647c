use super::*;

#[test]
fn defaults_to_same_origin_without_retry_or_staleness() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.url("/api/auth/me"), "/api/auth/me");
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_values(Some(" https://portal.example.com/ "), None, None);
    assert_eq!(cfg.api_base, "https://portal.example.com");
    assert_eq!(cfg.url("/api/legal/terms"), "https://portal.example.com/api/legal/terms");
}

#[test]
fn numeric_values_are_parsed() {
    let cfg = ClientConfig::from_values(None, Some("3"), Some("60"));
    assert_eq!(cfg.default_retry, 3);
    assert_eq!(cfg.default_freshness, Freshness::Window(Duration::from_secs(60)));
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let cfg = ClientConfig::from_values(None, Some("many"), Some("-5"));
    assert_eq!(cfg.default_retry, DEFAULT_CACHE_RETRY);
    assert_eq!(cfg.default_freshness, Freshness::Forever);
}
