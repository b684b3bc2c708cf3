//! # insurago
//!
//! Leptos + WASM frontend for an insurance agency back office. Field
//! agents and administrators sign in against a browser-persisted mock
//! session, land on a role-aware dashboard, and (for administrators)
//! manage customers, agents, routes, policies, and claims.
//!
//! This crate contains pages, components, application state, the auth
//! gate, and the seeded data the tables and dashboard render.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("insurago client starting");
    leptos::mount::hydrate_body(app::App);
}
