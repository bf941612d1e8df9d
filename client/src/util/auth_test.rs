use std::cell::{Cell, RefCell};

use any_spawner::Executor;
use async_trait::async_trait;
use tokio::task::LocalSet;

use super::*;
use crate::state::auth::SessionState;
use crate::state::session::SessionError;

// =============================================================
// Test doubles
// =============================================================

/// Oracle that counts calls; answers `Ok(true)` or never answers.
struct CountingOracle {
    calls: Cell<usize>,
    hang: bool,
}

impl CountingOracle {
    fn answering() -> Rc<Self> {
        Rc::new(Self { calls: Cell::new(0), hang: false })
    }

    fn hanging() -> Rc<Self> {
        Rc::new(Self { calls: Cell::new(0), hang: true })
    }
}

#[async_trait(?Send)]
impl SessionOracle for CountingOracle {
    async fn check_session(&self) -> Result<bool, SessionError> {
        self.calls.set(self.calls.get() + 1);
        if self.hang {
            futures::future::pending::<()>().await;
        }
        Ok(true)
    }
}

struct RecordingNavigator {
    path: RefCell<String>,
    navigations: RefCell<Vec<String>>,
    refreshes: Cell<usize>,
}

impl RecordingNavigator {
    fn at(path: &str) -> Rc<Self> {
        Rc::new(Self {
            path: RefCell::new(path.to_owned()),
            navigations: RefCell::new(Vec::new()),
            refreshes: Cell::new(0),
        })
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_owned());
    }

    fn refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }

    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }
}

/// Let the effect and the checks it spawned run to quiescence.
async fn settle() {
    for _ in 0..8 {
        Executor::tick().await;
    }
}

// =============================================================
// RefreshEpoch
// =============================================================

#[test]
fn next_epoch_increments() {
    assert_eq!(next_epoch(0), 1);
    assert_eq!(next_epoch(41), 42);
}

#[test]
fn next_epoch_wraps_instead_of_overflowing() {
    assert_eq!(next_epoch(u64::MAX), 0);
}

#[test]
fn refresh_epoch_bump_advances_counter() {
    let owner = Owner::new();
    owner.with(|| {
        let epoch = RefreshEpoch::new();
        assert_eq!(epoch.0.get_untracked(), 0);
        epoch.bump();
        epoch.bump();
        assert_eq!(epoch.0.get_untracked(), 2);
    });
}

// =============================================================
// navigate_or_refresh
// =============================================================

#[test]
fn navigate_or_refresh_navigates_to_other_route() {
    let nav = RecordingNavigator::at("/sign-in");
    navigate_or_refresh(&nav, "/dashboard");
    assert_eq!(*nav.navigations.borrow(), vec!["/dashboard".to_owned()]);
    assert_eq!(nav.refreshes.get(), 0);
}

#[test]
fn navigate_or_refresh_refreshes_in_place() {
    let nav = RecordingNavigator::at("/dashboard/");
    navigate_or_refresh(&nav, "/dashboard");
    assert!(nav.navigations.borrow().is_empty());
    assert_eq!(nav.refreshes.get(), 1);
}

// =============================================================
// drive_session_gate
// =============================================================

#[tokio::test]
async fn gate_effect_checks_once_per_route_or_refresh_change() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let oracle = CountingOracle::answering();
            let gate = Rc::new(SessionGate::new(
                oracle.clone(),
                RecordingNavigator::at("/dashboard"),
                GatePolicy::default(),
            ));
            let pathname = RwSignal::new("/dashboard".to_owned());
            let refresh = RefreshEpoch::new();
            let auth = RwSignal::new(AuthState::default());
            let unrelated = RwSignal::new(0_u32);

            drive_session_gate(gate, pathname.into(), refresh, auth);
            settle().await;
            assert_eq!(oracle.calls.get(), 1);
            assert_eq!(auth.get_untracked(), AuthState::resolved(SessionState::Authenticated));

            pathname.set("/settings".to_owned());
            settle().await;
            assert_eq!(oracle.calls.get(), 2);

            refresh.bump();
            settle().await;
            assert_eq!(oracle.calls.get(), 3);

            unrelated.set(1);
            auth.set(AuthState::default());
            settle().await;
            assert_eq!(oracle.calls.get(), 3);
        })
        .await;
}

#[tokio::test]
async fn gate_effect_marks_checking_while_pending() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let oracle = CountingOracle::hanging();
            let nav = RecordingNavigator::at("/dashboard");
            let gate = Rc::new(SessionGate::new(oracle.clone(), nav.clone(), GatePolicy::default()));
            let pathname = RwSignal::new("/dashboard".to_owned());
            let auth = RwSignal::new(AuthState::default());

            drive_session_gate(gate, pathname.into(), RefreshEpoch::new(), auth);
            settle().await;

            assert_eq!(oracle.calls.get(), 1);
            assert!(auth.get_untracked().is_checking_auth());
            assert_eq!(auth.get_untracked().session, SessionState::Unknown);
            assert!(nav.navigations.borrow().is_empty());
        })
        .await;
}
