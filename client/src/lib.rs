//! Leptos front end for the portfolio site.
//!
//! Compiled twice: with the `ssr` feature into the server binary for
//! server-side rendering, and with the `hydrate` feature to WebAssembly for
//! the browser. Animation, storage, and network code is gated on `hydrate`
//! so the SSR pass renders deterministic markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive system to server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
