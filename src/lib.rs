//! # cv360-client
//!
//! Leptos + WASM frontend for the CV360 job marketplace: role-based
//! dashboards for workers, employers, and HR admins, driven by REST calls
//! to the CV360 backend.
//!
//! The load-bearing layer is the session/role machinery: `state` owns the
//! session store, route guard, and role router; `net` owns the typed wire
//! schemas and the bearer-authenticated HTTP client; `pages` and
//! `components` consume both.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app over the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
