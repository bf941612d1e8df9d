//! Session gate: route-level redirects driven by an async session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route change starts a check against a [`SessionOracle`]. When the
//! check settles the gate applies a small decision table and issues at most
//! one navigation through a [`Navigator`]. Both collaborators are injected so
//! the gate never touches the cookie jar, the HTTP client, or the router
//! directly.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded and cooperative. The oracle call is the only suspension
//! point. Each check gets a generation number; starting a new check aborts the
//! previous oracle future and bumps the generation, and a check only applies
//! its result if its generation is still the latest. Results from superseded
//! checks are dropped, whatever order they resolve in.
//!
//! ERROR HANDLING
//! ==============
//! Oracle failures fail closed: they count as "not authenticated", are logged,
//! and are never surfaced to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{AbortHandle, AbortRegistration, Abortable};

use super::auth::{AuthState, SessionState};
use crate::config;

/// Why a session check could not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session check request failed: {0}")]
    Network(String),

    #[error("session check returned status {0}")]
    Status(u16),

    #[error("session check body malformed: {0}")]
    Malformed(String),

    #[error("session check unavailable outside the browser")]
    Unavailable,
}

/// Answers "does the ambient credential hold a valid session?".
#[async_trait(?Send)]
pub trait SessionOracle {
    /// Ask the backend once. `Ok(true)` means authenticated.
    async fn check_session(&self) -> Result<bool, SessionError>;
}

#[async_trait(?Send)]
impl<T: SessionOracle + ?Sized> SessionOracle for Rc<T> {
    async fn check_session(&self) -> Result<bool, SessionError> {
        (**self).check_session().await
    }
}

/// Navigation side effects the gate needs from the router.
pub trait Navigator {
    fn navigate(&self, path: &str);
    /// Re-run route-scoped data loads (and the session check) in place.
    fn refresh(&self);
    fn current_path(&self) -> String;
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }

    fn refresh(&self) {
        (**self).refresh();
    }

    fn current_path(&self) -> String {
        (**self).current_path()
    }
}

/// Compare routes ignoring a trailing `/` (but keep the root path intact).
pub fn normalize_route(route: &str) -> &str {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Which routes the gate redirects between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatePolicy {
    sign_in: String,
    home: String,
    public: Vec<String>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            sign_in: config::SIGN_IN.to_owned(),
            home: config::DASHBOARD.to_owned(),
            public: Vec::new(),
        }
    }
}

impl GatePolicy {
    /// Policy used by the app: default routes plus the pages a signed-out
    /// visitor must be able to reach.
    pub fn for_app() -> Self {
        Self::default()
            .with_public_route(config::SIGN_UP)
            .with_public_route(config::TEST_CONNECTION)
    }

    #[must_use]
    pub fn with_public_route(mut self, route: &str) -> Self {
        self.public.push(normalize_route(route).to_owned());
        self
    }

    pub fn sign_in(&self) -> &str {
        &self.sign_in
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn is_sign_in(&self, route: &str) -> bool {
        normalize_route(route) == self.sign_in
    }

    pub fn is_public(&self, route: &str) -> bool {
        let route = normalize_route(route);
        self.public.iter().any(|p| p == route)
    }

    /// Decision table: where (if anywhere) a settled check sends the visitor.
    pub fn redirect_for(&self, session: SessionState, route: &str) -> Option<&str> {
        if self.is_public(route) {
            return None;
        }
        match session {
            SessionState::Authenticated if self.is_sign_in(route) => Some(&self.home),
            SessionState::Unauthenticated if !self.is_sign_in(route) => Some(&self.sign_in),
            _ => None,
        }
    }
}

/// Handle for one started check; consumed by [`SessionGate::resolve`].
#[derive(Debug)]
pub struct CheckTicket {
    generation: u64,
    route: String,
    registration: AbortRegistration,
}

impl CheckTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn route(&self) -> &str {
        &self.route
    }
}

/// How a check ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The check was the latest one and its decision was applied.
    Resolved { session: SessionState, redirect: Option<String> },
    /// A newer check started first; nothing was applied.
    Superseded,
}

/// Route guard that owns the session state and issues redirects.
pub struct SessionGate<O, N> {
    oracle: O,
    navigator: N,
    policy: GatePolicy,
    generation: Cell<u64>,
    in_flight: RefCell<Option<AbortHandle>>,
    state: Cell<AuthState>,
}

impl<O, N> SessionGate<O, N>
where
    O: SessionOracle,
    N: Navigator,
{
    pub fn new(oracle: O, navigator: N, policy: GatePolicy) -> Self {
        Self {
            oracle,
            navigator,
            policy,
            generation: Cell::new(0),
            in_flight: RefCell::new(None),
            state: Cell::new(AuthState::default()),
        }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    pub fn auth_state(&self) -> AuthState {
        self.state.get()
    }

    pub fn is_checking_auth(&self) -> bool {
        self.state.get().checking
    }

    /// Check the route the navigator currently reports.
    pub async fn check_session(&self) -> CheckOutcome {
        let ticket = self.begin_at(&self.navigator.current_path());
        self.resolve(ticket).await
    }

    /// Start a check for `route`, superseding any check still in flight.
    pub fn begin_at(&self, route: &str) -> CheckTicket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.in_flight.replace(Some(handle)) {
            previous.abort();
        }

        self.state.set(AuthState::checking());
        CheckTicket { generation, route: normalize_route(route).to_owned(), registration }
    }

    /// Wait for the oracle and apply the decision if this check is current.
    pub async fn resolve(&self, ticket: CheckTicket) -> CheckOutcome {
        let CheckTicket { generation, route, registration } = ticket;
        match Abortable::new(self.oracle.check_session(), registration).await {
            Ok(result) => self.settle(generation, &route, result),
            Err(_aborted) => CheckOutcome::Superseded,
        }
    }

    fn settle(&self, generation: u64, route: &str, result: Result<bool, SessionError>) -> CheckOutcome {
        if generation != self.generation.get() {
            return CheckOutcome::Superseded;
        }
        self.in_flight.borrow_mut().take();

        let session = match result {
            Ok(authenticated) => SessionState::from_authenticated(authenticated),
            Err(e) => {
                leptos::logging::warn!("session check failed on {route}: {e}");
                SessionState::Unauthenticated
            }
        };
        self.state.set(AuthState::resolved(session));

        let redirect = self.policy.redirect_for(session, route).map(str::to_owned);
        if let Some(target) = &redirect {
            self.navigator.navigate(target);
        }
        CheckOutcome::Resolved { session, redirect }
    }
}
