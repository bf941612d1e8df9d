//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` sets the session cookie server-side. Before leaving the page the
//! session endpoint is asked directly whether the cookie took, then the router
//! is moved to the dashboard. The route change re-runs the gate; `refresh()`
//! is only used when the visitor is already on the dashboard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::config;
use crate::net::api::{self, ApiError, HttpSessionOracle};
use crate::net::graphql::LoginVariables;
use crate::net::types::AuthPayload;
use crate::state::session::{SessionError, SessionOracle};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{navigate_or_refresh, use_router_navigator};

/// Trim and require both fields.
///
/// # Errors
///
/// Returns the inline message for a missing field.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<LoginVariables, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(LoginVariables { email: email.to_owned(), password: password.to_owned() })
}

/// Toast text for a failed `login` call.
pub fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::GraphQl(messages) if messages.iter().any(|m| m.contains("Invalid credentials")) => {
            "Invalid email or password"
        }
        _ => "Login failed. Please try again.",
    }
}

/// What the page does once `login` and the follow-up session check are done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Session confirmed; go to the dashboard.
    Verified,
    /// `login` succeeded but the session endpoint did not confirm it.
    Unverified,
    /// `login` failed; carries the toast text.
    Rejected(&'static str),
}

impl SignInOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Verified => "Login successful!",
            Self::Unverified => "Login successful but session couldn't be verified",
            Self::Rejected(msg) => msg,
        }
    }
}

/// Combine the `login` result with the session check that followed it.
pub fn after_login(result: &Result<AuthPayload, ApiError>, verified: &Result<bool, SessionError>) -> SignInOutcome {
    match (result, verified) {
        (Ok(_), Ok(true)) => SignInOutcome::Verified,
        (Ok(_), _) => SignInOutcome::Unverified,
        (Err(e), _) => SignInOutcome::Rejected(login_error_message(e)),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigator = use_router_navigator();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let variables = match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigator = navigator.clone();
        leptos::task::spawn_local(async move {
            let result = api::login(variables).await;
            let verified = match &result {
                Ok(_) => HttpSessionOracle::default().check_session().await,
                Err(_) => Ok(false),
            };
            busy.set(false);

            let outcome = after_login(&result, &verified);
            match outcome {
                SignInOutcome::Verified => {
                    notify(toasts, ToastKind::Success, outcome.message());
                    navigate_or_refresh(&navigator, config::DASHBOARD);
                }
                SignInOutcome::Unverified => {
                    if let Err(e) = &verified {
                        leptos::logging::warn!("session check after login failed: {e}");
                    }
                    notify(toasts, ToastKind::Error, outcome.message());
                }
                SignInOutcome::Rejected(_) => {
                    if let Err(e) = &result {
                        leptos::logging::warn!("login failed: {e}");
                    }
                    notify(toasts, ToastKind::Error, outcome.message());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account? " <a href=config::SIGN_UP>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
