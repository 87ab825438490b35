//! # processmart-client
//!
//! Leptos + WASM single-page dashboard for the Processmart process
//! management backend.
//!
//! Navigation is hash based: the `router` module resolves the URL fragment to
//! a page, gates protected pages on the `session`, and owns each page's
//! mount lifecycle. Pages live in `pages`, shared chrome and charts in
//! `components`, backend access in `net`, and pure helpers in `util`.
//!
//! Browser-only code sits behind the `csr` feature so the router, state and
//! helpers are tested natively.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    app::start();
}
