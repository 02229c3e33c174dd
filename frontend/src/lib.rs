//! Browser-independent core of the Only Bulls landing page.
//!
//! Everything here compiles for the host target as well as for
//! `wasm32-unknown-unknown`; the browser glue only runs once it is called
//! from the Yew app in `main.rs`.

pub mod analytics;
pub mod config;
pub mod lead;
pub mod reveal;
pub mod vitals;
