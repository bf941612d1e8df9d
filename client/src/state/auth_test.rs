use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unknown() {
    let state = AuthState::default();
    assert_eq!(state.session, SessionState::Unknown);
}

#[test]
fn auth_state_default_not_checking() {
    let state = AuthState::default();
    assert!(!state.is_checking_auth());
}

#[test]
fn checking_state_resets_session() {
    let state = AuthState::checking();
    assert!(state.is_checking_auth());
    assert_eq!(state.session, SessionState::Unknown);
}

#[test]
fn resolved_state_clears_checking() {
    let state = AuthState::resolved(SessionState::Authenticated);
    assert!(!state.is_checking_auth());
    assert!(state.is_authenticated());
}

#[test]
fn session_state_from_authenticated_flag() {
    assert_eq!(SessionState::from_authenticated(true), SessionState::Authenticated);
    assert_eq!(SessionState::from_authenticated(false), SessionState::Unauthenticated);
}

// =============================================================
// shell_view
// =============================================================

#[test]
fn shell_loads_while_checking() {
    let policy = GatePolicy::default();
    assert_eq!(shell_view(&AuthState::checking(), "/dashboard", &policy), ShellView::Loading);
    assert_eq!(shell_view(&AuthState::checking(), "/sign-in", &policy), ShellView::Loading);
}

#[test]
fn shell_loads_before_first_check() {
    let policy = GatePolicy::default();
    assert_eq!(shell_view(&AuthState::default(), "/dashboard", &policy), ShellView::Loading);
}

#[test]
fn shell_renders_protected_route_for_authenticated_user() {
    let policy = GatePolicy::default();
    let auth = AuthState::resolved(SessionState::Authenticated);
    assert_eq!(shell_view(&auth, "/dashboard", &policy), ShellView::Content);
}

#[test]
fn shell_hides_protected_route_from_signed_out_visitor() {
    let policy = GatePolicy::default();
    let auth = AuthState::resolved(SessionState::Unauthenticated);
    assert_eq!(shell_view(&auth, "/dashboard", &policy), ShellView::Loading);
}

#[test]
fn shell_renders_sign_in_only_without_session() {
    let policy = GatePolicy::default();
    let signed_out = AuthState::resolved(SessionState::Unauthenticated);
    let signed_in = AuthState::resolved(SessionState::Authenticated);
    assert_eq!(shell_view(&signed_out, "/sign-in", &policy), ShellView::Content);
    assert_eq!(shell_view(&signed_in, "/sign-in", &policy), ShellView::Loading);
}

#[test]
fn shell_never_gates_public_routes() {
    let policy = GatePolicy::for_app();
    assert_eq!(shell_view(&AuthState::checking(), "/sign-up", &policy), ShellView::Content);
    let signed_in = AuthState::resolved(SessionState::Authenticated);
    assert_eq!(shell_view(&signed_in, "/test-connection/", &policy), ShellView::Content);
}
