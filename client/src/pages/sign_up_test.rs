use super::*;

#[test]
fn validate_trims_name_and_email() {
    let vars = validate_sign_up_input(" Ada ", " ada@example.test ", "password1").unwrap();
    assert_eq!(vars.name, "Ada");
    assert_eq!(vars.email, "ada@example.test");
    assert_eq!(vars.password, "password1");
}

#[test]
fn validate_reports_first_missing_field() {
    assert_eq!(validate_sign_up_input("", "", "").unwrap_err(), "Name is required");
    assert_eq!(validate_sign_up_input("Ada", " ", "").unwrap_err(), "Email is required");
}

#[test]
fn password_needs_eight_chars() {
    assert_eq!(
        validate_sign_up_input("Ada", "ada@example.test", "1234567").unwrap_err(),
        "Password must be at least 8 characters"
    );
    assert!(validate_sign_up_input("Ada", "ada@example.test", "12345678").is_ok());
}

#[test]
fn display_error_strips_graphql_prefix() {
    assert_eq!(display_error("GraphQL error: Email already in use"), "Email already in use");
    assert_eq!(display_error("network error: offline"), "network error: offline");
}
