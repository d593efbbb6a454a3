//! Organization Roster - Dioxus Fullstack Web Application
//!
//! Server-rendered organization directory. Organization and member data
//! come from the roster GraphQL data service configured by `API_URL`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
#[cfg(feature = "server")]
mod config;
mod pages;
mod routes;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster=debug,roster_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(feature = "server")]
    match config::Config::from_env() {
        Ok(config) => {
            tracing::info!(api_url = %config.api_url, "Configuration loaded");
            config::init(config);
        }
        Err(e) => tracing::warn!(error = %e, "Failed to load configuration, using defaults"),
    }

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
