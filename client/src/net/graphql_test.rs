use super::*;

#[test]
fn resolve_endpoint_defaults_when_unset_or_blank() {
    assert_eq!(resolve_endpoint(None), DEFAULT_ENDPOINT);
    assert_eq!(resolve_endpoint(Some("  ")), DEFAULT_ENDPOINT);
}

#[test]
fn resolve_endpoint_uses_configured_value() {
    assert_eq!(resolve_endpoint(Some(" http://localhost:1337/graphql ")), "http://localhost:1337/graphql");
}
