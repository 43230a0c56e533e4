//! # Paideia Admin Console
//!
//! Paideia serves the compiled admin UI and proxies its `/api` calls to the
//! learning-platform backend, so the browser talks to a single origin.
//!
//! ## Features
//!
//! - **Embedded UI**: the Leptos bundle ships inside the binary
//! - **API Proxy**: `/api/*` is relayed verbatim to the configured upstream
//! - **Health Checks**: `/health` and `/health/live` endpoints
//! - **Configuration**: TOML file, environment variables, and CLI flags
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paideia::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let settings = Settings::new()?;
//!
//!     let app = paideia::create_app(&settings)?;
//!     // Serve `app` on settings.server.host:settings.server.port
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod cli;
pub mod config;
pub mod health;
pub mod proxy;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};

use crate::config::Settings;
use crate::health::HealthHandler;
use crate::proxy::UpstreamClient;

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(settings: &Settings) -> anyhow::Result<Router> {
    let health_handler = Arc::new(HealthHandler::new(&settings.upstream.url));
    let upstream = UpstreamClient::new(&settings.upstream)?;

    let router = Router::new()
        // Health check endpoints
        .route(
            "/health",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.health().await }
                }
            }),
        )
        .route(
            "/health/live",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.live().await }
                }
            }),
        )
        // Everything the UI asks of the platform goes through the proxy
        .route("/api", any(proxy::forward))
        .route("/api/*path", any(proxy::forward))
        .with_state(upstream)
        // UI endpoint (catch-all for SPA)
        .fallback(assets::serve_ui);

    Ok(router
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        ))
}
