//! Page controller for the registrant listing.
//!
//! The server renders the page (Bootstrap markup, one `<tr>` per record);
//! this module enhances it in place: form validation feedback, alert
//! auto-dismiss, navbar and row animations, and inline edit/delete against
//! the `/editar/{id}` and `/eliminar/{id}` endpoints.

mod api;
mod components;
mod config;
mod dom;
mod models;
mod page;
mod state;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    page::start();
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
// live next to the page modules; they all share this configuration.
#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
