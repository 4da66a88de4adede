//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Create a short URL (plain-text body)
//! - `GET  /{id}`    - Short link redirect
//! - `GET  /health`  - Health check of the link store
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Validation** - URL body and id path checks (see [`crate::api::middleware::validate`])

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes(&state))
        .with_state(state)
        .layer(tracing::layer())
}
