//! Minimum layout width for the `<html>` element.
//!
//! Applies `min-width` on mount and re-applies it whenever the window is
//! resized below the limit. Requires a browser environment.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// CSS value for a pixel width.
pub fn min_width_value(min_width: u32) -> String {
    format!("{min_width}px")
}

/// Whether a window of `inner_width` CSS pixels needs the clamp re-applied.
pub fn needs_clamp(inner_width: f64, min_width: u32) -> bool {
    inner_width < f64::from(min_width)
}

#[cfg(any(test, feature = "hydrate"))]
fn style_error_message(value: &str, err: &dyn std::fmt::Debug) -> String {
    format!("failed to set <html> min-width to {value}: {err:?}")
}

/// Enforce `min_width` on `<html>` for the lifetime of the calling owner.
pub fn install_min_width(min_width: u32) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        apply_min_width(min_width);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let inner = window().inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default();
            if needs_clamp(inner, min_width) {
                apply_min_width(min_width);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = min_width;
    }
}

#[cfg(feature = "hydrate")]
fn apply_min_width(min_width: u32) {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let value = min_width_value(min_width);
    if let Err(e) = root.style().set_property("min-width", &value) {
        leptos::logging::warn!("{}", style_error_message(&value, &e));
    }
}
