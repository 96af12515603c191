//! API Access
//!
//! Browser HTTP client for the activities server.

pub mod client;

pub use client::{get_api_base, GlooApi};
