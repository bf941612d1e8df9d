//! Account creation page (public route).

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::config;
use crate::net::api;
use crate::net::graphql::SignupVariables;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{navigate_or_refresh, use_router_navigator};
use crate::util::cookie;

const MIN_PASSWORD_CHARS: usize = 8;

/// Trim name/email and enforce the password length.
///
/// # Errors
///
/// Returns the inline message for the first invalid field.
pub fn validate_sign_up_input(name: &str, email: &str, password: &str) -> Result<SignupVariables, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 8 characters");
    }
    Ok(SignupVariables { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Inline error text with the transport prefix removed.
pub fn display_error(message: &str) -> String {
    message.strip_prefix("GraphQL error: ").unwrap_or(message).to_owned()
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigator = use_router_navigator();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let variables =
            match validate_sign_up_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(v) => v,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
        error.set(None);
        busy.set(true);

        let navigator = navigator.clone();
        leptos::task::spawn_local(async move {
            let result = api::signup(variables).await;
            busy.set(false);
            match result {
                Ok(payload) => {
                    cookie::store_token(&payload.token);
                    notify(toasts, ToastKind::Success, "Account created successfully!");
                    navigate_or_refresh(&navigator, config::DASHBOARD);
                }
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    error.set(Some(display_error(&e.to_string())));
                    notify(toasts, ToastKind::Error, "Signup failed. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (min 8 characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href=config::SIGN_IN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
