//! # client
//!
//! Leptos + WASM frontend for pawchat: a dog-breed listing and an
//! authenticated chat shell with login, registration and account search.
//!
//! This crate contains pages, components, the session/search stores, and the
//! REST helpers that talk to the external chat backend and the dog API. The
//! `server` crate renders it via SSR and serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
