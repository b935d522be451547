//! # bankabc-client
//!
//! Leptos + WASM frontend for the BankABC banking portal.
//!
//! This crate contains the customer, employee and admin portals, the
//! cookie-backed session store, the auth service that talks to the banking
//! backend, and the route guards that decide per navigation which portal a
//! user may reach. Guard and session logic is plain Rust so it runs the same
//! in the browser, during server rendering, and under `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
