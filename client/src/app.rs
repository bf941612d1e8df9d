//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::session_shell::SessionShell;
use crate::components::toaster::Toaster;
use crate::config;
use crate::net::api::HttpSessionOracle;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, sign_in::SignInPage, sign_up::SignUpPage,
    test_connection::TestConnectionPage,
};
use crate::state::{auth::AuthState, session::GatePolicy, toast::ToastState};
use crate::util::auth::{RefreshEpoch, install_session_gate};
use crate::util::viewport;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_state();

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Taskdeck"/>

        <Router>
            <AppRoutes/>
        </Router>
    }
}

/// Shared contexts: auth snapshot, toasts, refresh epoch, and the one
/// `GatePolicy` read by both the gate and the shell.
pub fn provide_app_state() {
    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RefreshEpoch::new());
    provide_context(GatePolicy::for_app());
}

/// Everything that needs the router: the session gate, toasts, and routes.
#[component]
fn AppRoutes() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let policy = expect_context::<GatePolicy>();
    install_session_gate(auth, HttpSessionOracle::default(), policy);
    viewport::install_min_width(config::MIN_VIEWPORT_WIDTH);

    view! {
        <Toaster/>
        <main class="app">
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=GatedLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("test-connection") view=TestConnectionPage/>
                </ParentRoute>
            </Routes>
        </main>
    }
}

#[component]
fn GatedLayout() -> impl IntoView {
    let policy = expect_context::<GatePolicy>();
    view! {
        <SessionShell policy=policy>
            <Outlet/>
        </SessionShell>
    }
}
