use super::*;

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("http://api.test", "graphql"), "http://api.test/graphql");
}

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(join_url("http://api.test/", "/graphql"), "http://api.test/graphql");
    assert_eq!(
        join_url("http://api.test///", "auth/check-session"),
        "http://api.test/auth/check-session"
    );
}

#[test]
fn join_url_trims_whitespace() {
    assert_eq!(join_url(" http://api.test ", " graphql "), "http://api.test/graphql");
}

#[test]
fn endpoints_share_the_compiled_origin() {
    let base = api_base_url().trim_end_matches('/');
    assert_eq!(graphql_endpoint(), format!("{base}/graphql"));
    assert_eq!(session_endpoint(), format!("{base}/auth/check-session"));
}

#[test]
fn api_base_url_is_never_empty() {
    assert!(!api_base_url().trim().is_empty());
}
