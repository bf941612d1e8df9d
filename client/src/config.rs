//! Build-time client configuration and route paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API origin is baked into the WASM bundle at compile time from
//! `TASKDECK_API_URL`, the same way a public build-time env var would be.
//! Route paths live here so the session gate, pages, and router agree on them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `TASKDECK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Narrowest layout width the UI supports, in CSS pixels.
pub const MIN_VIEWPORT_WIDTH: u32 = 320;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_TTL_MS: u32 = 4_000;

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/sign-in";
pub const SIGN_UP: &str = "/sign-up";
pub const DASHBOARD: &str = "/dashboard";
pub const TEST_CONNECTION: &str = "/test-connection";

/// The API origin compiled into this build.
pub fn api_base_url() -> &'static str {
    match option_env!("TASKDECK_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

/// Join an API origin and a path without doubling or dropping the `/`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}

/// `POST` target for all GraphQL operations.
pub fn graphql_endpoint() -> String {
    join_url(api_base_url(), "graphql")
}

/// `GET` target for the cookie session check.
pub fn session_endpoint() -> String {
    join_url(api_base_url(), "auth/check-session")
}
