//! Page shell that hides route content until the session gate allows it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used as the layout of the gated parent route. The gate itself (installed in
//! `app`) performs redirects; this component only decides between the neutral
//! loading state and the matched child route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthState, ShellView, shell_view};
use crate::state::session::GatePolicy;

#[component]
pub fn SessionShell(policy: GatePolicy, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let view_state = Memo::new(move |_| pathname.with(|route| shell_view(&auth.get(), route, &policy)));

    view! {
        <Show
            when=move || view_state.get() == ShellView::Content
            fallback=|| view! { <div class="app-loading">"Loading application..."</div> }
        >
            {children()}
        </Show>
    }
}
