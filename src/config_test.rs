use super::*;

#[test]
fn parse_endpoint_accepts_http_and_https() {
    assert_eq!(parse_endpoint("https://api.example.com/graphql").unwrap(), "https://api.example.com/graphql");
    assert_eq!(parse_endpoint(" http://127.0.0.1:1337/graphql ").unwrap(), "http://127.0.0.1:1337/graphql");
}

#[test]
fn parse_endpoint_rejects_other_schemes() {
    assert!(matches!(parse_endpoint("ftp://example.com"), Err(ConfigError::InvalidEndpoint(_))));
    assert!(matches!(parse_endpoint("api.example.com/graphql"), Err(ConfigError::InvalidEndpoint(_))));
}

#[test]
fn default_state_dir_prefers_xdg() {
    assert_eq!(default_state_dir(Some("/xdg"), Some("/home/a")), Some(PathBuf::from("/xdg/portal")));
}

#[test]
fn default_state_dir_falls_back_to_home() {
    assert_eq!(default_state_dir(None, Some("/home/a")), Some(PathBuf::from("/home/a/.portal")));
    assert_eq!(default_state_dir(Some(""), Some("/home/a")), Some(PathBuf::from("/home/a/.portal")));
}

#[test]
fn default_state_dir_none_without_env() {
    assert_eq!(default_state_dir(None, None), None);
}

#[test]
fn parse_secs_uses_default_for_missing_invalid_or_zero() {
    assert_eq!(parse_secs(None, 30), 30);
    assert_eq!(parse_secs(Some("abc"), 30), 30);
    assert_eq!(parse_secs(Some("0"), 30), 30);
    assert_eq!(parse_secs(Some(" 45 "), 30), 45);
}

#[test]
fn from_env_keeps_explicit_state_dir() {
    let cfg = ClientConfig::from_env("https://api.example.com/graphql", Some(PathBuf::from("/tmp/portal-test"))).unwrap();
    assert_eq!(cfg.state_dir, PathBuf::from("/tmp/portal-test"));
    assert_eq!(cfg.endpoint, "https://api.example.com/graphql");
}
