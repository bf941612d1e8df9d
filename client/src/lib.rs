//! # taskdeck-client
//!
//! Leptos + WASM frontend for the taskdeck task manager.
//!
//! This crate contains pages, components, application state, the GraphQL task
//! API client, and the session gate that decides which routes a visitor may
//! see. The `taskdeck` host binary renders it server-side; the `hydrate`
//! feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
