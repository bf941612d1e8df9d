//! Auth token cookie written after sign-up.
//!
//! The API also sets its own HTTP-only session cookie; this one mirrors the
//! token returned by `signup` for one day so the first request after
//! registration is already authenticated. Requires a browser environment.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

pub const TOKEN_COOKIE: &str = "token";
pub const TOKEN_MAX_AGE_SECS: u32 = 24 * 60 * 60;

/// Build the `document.cookie` assignment for `token`.
///
/// Returns `None` for empty tokens or tokens containing characters that would
/// break the cookie syntax.
pub fn format_token_cookie(token: &str, secure: bool) -> Option<String> {
    let valid = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, ';' | ',' | '"' | '\\'));
    if !valid {
        return None;
    }
    let mut cookie = format!("{TOKEN_COOKIE}={token}; Max-Age={TOKEN_MAX_AGE_SECS}; Path=/; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    Some(cookie)
}

/// Store the token cookie; `Secure` when the page is served over https.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else { return };
        let secure = window.location().protocol().is_ok_and(|p| p == "https:");
        let Some(cookie) = format_token_cookie(token, secure) else {
            leptos::logging::warn!("refusing to store malformed auth token");
            return;
        };
        if let Some(doc) = window.document().and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok()) {
            if let Err(e) = doc.set_cookie(&cookie) {
                leptos::logging::warn!("failed to store auth token: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
