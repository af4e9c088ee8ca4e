//! Activity Board
//!
//! Browser front-end for the activities service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with availability and participants
//! - Category filter, text search, and sorting
//! - Signup form and per-participant unregister
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Filtering, sorting, and outcome messages come from the `activity-board`
//! library; this crate only wires them to the DOM and the Fetch API.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
