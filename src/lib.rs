//! # siteplan-client
//!
//! Leptos + WASM frontend for the SitePlan construction-planning
//! application.
//!
//! The user submits a site-analysis form (with an inline land-image
//! preview), browses the generated plan through a set of fixed views,
//! exports the plan as a PDF, and talks to the planning assistant in a
//! small chat widget. All server work happens behind three HTTP
//! endpoints; this crate is the UI layer only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
