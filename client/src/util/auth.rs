//! Leptos wiring for the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `install_session_gate` is called once, inside the router, by the app's
//! route host. It adapts the router to the gate's [`Navigator`] seam and runs a
//! check whenever the pathname changes or someone calls `refresh()`. Nothing
//! else is tracked, so unrelated re-renders never start a check.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::session::{CheckOutcome, GatePolicy, Navigator, SessionGate, SessionOracle, normalize_route};

/// Counter bumped by `Navigator::refresh`; route-scoped loads track it.
#[derive(Clone, Copy, Debug)]
pub struct RefreshEpoch(RwSignal<u64>);

impl RefreshEpoch {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn bump(self) {
        self.0.update(|n| *n = next_epoch(*n));
    }

    /// Current epoch, subscribing the calling effect/resource to changes.
    pub fn track(self) -> u64 {
        self.0.get()
    }
}

impl Default for RefreshEpoch {
    fn default() -> Self {
        Self::new()
    }
}

fn next_epoch(current: u64) -> u64 {
    current.wrapping_add(1)
}

/// Router-backed [`Navigator`].
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
    pathname: Memo<String>,
    refresh: RefreshEpoch,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn refresh(&self) {
        self.refresh.bump();
    }

    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }
}

/// Navigator for the enclosing `<Router>`.
///
/// Requires a [`RefreshEpoch`] in context (provided by `App`).
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator {
        navigate: use_navigate(),
        pathname: use_location().pathname,
        refresh: expect_context::<RefreshEpoch>(),
    }
}

/// Go to `target`, or re-run route-scoped loads when already there.
///
/// A pathname change already re-runs the gate and remounts the page, so the
/// refresh epoch is only bumped when the route stays the same.
pub fn navigate_or_refresh<N: Navigator + ?Sized>(navigator: &N, target: &str) {
    if normalize_route(&navigator.current_path()) == normalize_route(target) {
        navigator.refresh();
    } else {
        navigator.navigate(target);
    }
}

/// Run the session gate for the enclosing router and mirror its state into
/// `auth`.
pub fn install_session_gate<O>(auth: RwSignal<AuthState>, oracle: O, policy: GatePolicy)
where
    O: SessionOracle + 'static,
{
    let navigator = use_router_navigator();
    let pathname = navigator.pathname;
    let refresh = navigator.refresh;
    let gate = Rc::new(SessionGate::new(oracle, navigator, policy));
    drive_session_gate(gate, pathname.into(), refresh, auth);
}

/// Start a check whenever `pathname` or `refresh` changes.
///
/// The effect reads nothing else, so writes to `auth` (or any other signal)
/// never start a check.
pub fn drive_session_gate<O, N>(
    gate: Rc<SessionGate<O, N>>,
    pathname: Signal<String>,
    refresh: RefreshEpoch,
    auth: RwSignal<AuthState>,
) where
    O: SessionOracle + 'static,
    N: Navigator + 'static,
{
    let gate = StoredValue::new_local(gate);

    Effect::new(move || {
        let route = pathname.get();
        refresh.track();

        let gate = gate.get_value();
        let ticket = gate.begin_at(&route);
        auth.set(gate.auth_state());

        leptos::task::spawn_local(async move {
            if let CheckOutcome::Resolved { .. } = gate.resolve(ticket).await {
                auth.set(gate.auth_state());
            }
        });
    });
}
