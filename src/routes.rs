//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short code redirect
//! - `POST /api/shorten`  - Register short codes (batch-capable, 1-5 URLs)
//! - `GET  /api/entries`  - List retained entries with click detail
//! - `GET  /api/health`   - Health check
//!
//! Every request is logged through the tracing layer.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{entries_handler, health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/entries", get(entries_handler))
        .route("/api/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}
