//! # teamboard
//!
//! Leptos + WASM frontend for the Teamboard team-announcement application.
//! Authenticated users read and publish announcements; admins manage user
//! roles. All data lives behind the external REST backend under `/api` —
//! this crate only mirrors it for display and gates routes on a locally
//! cached identity.
//!
//! This crate contains pages, components, application state, the typed API
//! clients, and the localStorage-backed session plumbing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install panic reporting and console logging, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
