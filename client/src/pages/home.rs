//! Root route; signed-in users land on the dashboard.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path=config::DASHBOARD/> }
}
