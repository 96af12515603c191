//! Activity Board Page
//!
//! Sign-up board built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with live participant rosters
//! - Sign-up form with activity selector
//! - One-click removal of a participant (after confirmation)
//! - In-place card updates, no page reloads
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The page controller itself lives in the `activity-board`
//! crate; this crate supplies its browser view (signals) and its HTTP client
//! (`gloo-net`).

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
