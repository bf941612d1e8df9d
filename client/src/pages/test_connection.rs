//! Backend reachability check (public route).
//!
//! Sends `{ __typename }` once on mount and reports the outcome both inline
//! and as a toast.

#[cfg(test)]
#[path = "test_connection_test.rs"]
mod test_connection_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::config;
use crate::net::api;
use crate::state::toast::{ToastKind, ToastState};

/// Things to check when the API cannot be reached.
pub fn troubleshooting_steps(endpoint: &str) -> Vec<String> {
    vec![
        format!("The API server is running and serving {endpoint}"),
        "TASKDECK_API_URL was set correctly when this client was built".to_owned(),
        "The API allows credentialed CORS requests from this origin".to_owned(),
    ]
}

#[component]
pub fn TestConnectionPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let endpoint = config::graphql_endpoint();
    let endpoint_label = format!("Endpoint: {endpoint}");
    let probe = LocalResource::new(api::test_connection);

    Effect::new(move || match probe.get() {
        Some(Ok(_)) => notify(toasts, ToastKind::Success, "Successfully connected to backend!"),
        Some(Err(e)) => {
            leptos::logging::warn!("connection test failed: {e}");
            notify(toasts, ToastKind::Error, format!("Failed to connect to backend: {e}"));
        }
        None => {}
    });

    view! {
        <div class="connection-page">
            <h1>"Backend Connection Test"</h1>
            <p class="connection-page__endpoint">{endpoint_label}</p>
            {move || match probe.get() {
                None => view! { <p class="connection-page__status">"Connecting..."</p> }.into_any(),
                Some(Ok(typename)) => {
                    view! {
                        <p class="connection-page__status connection-page__status--ok">
                            {format!("Successfully connected to backend! (root type: {typename})")}
                        </p>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    let steps = troubleshooting_steps(&endpoint);
                    view! {
                        <div class="connection-page__status connection-page__status--error">
                            <p>{format!("Error: {e}")}</p>
                            <p>"Check that:"</p>
                            <ul>{steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}</ul>
                        </div>
                    }
                        .into_any()
                }
            }}
            <a href=config::HOME>"Back to home"</a>
        </div>
    }
}
