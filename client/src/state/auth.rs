//! Auth-session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session gate (`state::session`), read by the page shell
//! and identity-aware pages to decide between a loading state and route
//! content.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::GatePolicy;

/// Result of the most recent session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No check has resolved since the current one started.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    pub fn from_authenticated(authenticated: bool) -> Self {
        if authenticated { Self::Authenticated } else { Self::Unauthenticated }
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

/// Snapshot of the gate exposed read-only to rendering code.
///
/// Provided as `RwSignal<AuthState>` context; only the gate effect writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub checking: bool,
}

impl AuthState {
    /// State while a check is in flight.
    pub fn checking() -> Self {
        Self { session: SessionState::Unknown, checking: true }
    }

    /// State after the current check settled.
    pub fn resolved(session: SessionState) -> Self {
        Self { session, checking: false }
    }

    pub fn is_checking_auth(&self) -> bool {
        self.checking
    }

    pub fn is_authenticated(&self) -> bool {
        self.session == SessionState::Authenticated
    }
}

/// What the page shell should render for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellView {
    /// Neutral placeholder; neither protected content nor the sign-in form.
    Loading,
    Content,
}

/// Decide whether the shell may render route content yet.
///
/// Public routes are never gated. Everything else waits for a settled check,
/// and only renders when that check agrees with the route: the sign-in page
/// for visitors without a session, every other page for signed-in users.
/// In the remaining cases the gate is about to redirect, so the shell keeps
/// showing the placeholder.
pub fn shell_view(auth: &AuthState, route: &str, policy: &GatePolicy) -> ShellView {
    if policy.is_public(route) {
        return ShellView::Content;
    }
    if auth.checking || !auth.session.is_known() {
        return ShellView::Loading;
    }
    let allowed = if policy.is_sign_in(route) {
        auth.session == SessionState::Unauthenticated
    } else {
        auth.session == SessionState::Authenticated
    };
    if allowed { ShellView::Content } else { ShellView::Loading }
}
