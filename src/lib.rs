//! Magic UI - interactive effects showcase
//!
//! A server-rendered landing page whose visual effects (scroll reveals,
//! cursor trail, magnetic buttons, card tilt, marquees, lightbox, keyboard
//! easter eggs and frame-rate throttling) are written in Rust, compiled to
//! WebAssembly and attached with `web-sys` after hydration.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
