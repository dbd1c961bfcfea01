//! Hi-API - AI service catalog front-end
//!
//! A client-rendered Dioxus web application presenting the Hi-API provider
//! catalog. All catalog data is static; there is no API server behind the
//! pages.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Static export (pre-rendered pages, deployed under the base path in
//! Dioxus.toml):
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

pub mod app;
pub mod auth;
pub mod billing;
pub mod catalog;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod session;
pub mod types;

use dioxus::prelude::*;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
