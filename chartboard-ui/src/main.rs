//! Chartboard Web UI
//!
//! Pie chart and progress bar demo built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. The chart store lives in the global state and is
//! persisted to `localStorage` after every change, so entries survive a
//! page reload.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
