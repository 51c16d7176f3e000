//! # background
//!
//! Privileged agent for gesture navigation. Runs in the extension's
//! background context: receives `{action}` messages from the in-page
//! capture agent, resolves the active tab of the focused window, and
//! performs the requested navigation operation on it.
//!
//! Routing is pure and lives in [`router`]; [`tabs`] and [`listener`] are
//! the thin wasm edges over the extension APIs.

pub mod listener;
pub mod router;
pub mod tabs;

use wasm_bindgen::prelude::wasm_bindgen;

/// Background entry point: install logging and the message listener.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to install logger");

    listener::install();
}
