use super::*;

#[test]
fn format_token_cookie_sets_one_day_root_path() {
    assert_eq!(
        format_token_cookie("abc.def.ghi", false).as_deref(),
        Some("token=abc.def.ghi; Max-Age=86400; Path=/; SameSite=Lax")
    );
}

#[test]
fn format_token_cookie_marks_secure() {
    let cookie = format_token_cookie("abc", true).unwrap();
    assert!(cookie.ends_with("; Secure"));
}

#[test]
fn format_token_cookie_rejects_empty_token() {
    assert_eq!(format_token_cookie("", false), None);
}

#[test]
fn format_token_cookie_rejects_separators() {
    for bad in ["a;b", "a b", "a,b", "a\"b", "a\nb"] {
        assert_eq!(format_token_cookie(bad, false), None, "token {bad:?}");
    }
}
