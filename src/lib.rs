//! # quill
//!
//! Leptos + WASM front end for the Quill blog. Replaces the original React
//! SPA with a Rust-native UI layer: routed pages, chrome components, the
//! session store, route guards, and the REST client for the blog API.
//!
//! Browser-only behavior is gated behind the `csr` cargo feature so the full
//! test suite compiles and runs natively with no features enabled.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
