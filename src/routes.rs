//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users`, `/users/{id}` - User management (Authorization header required)
//! - anything else, or an unsupported method - `404` with a JSON error body
//!
//! # Middleware
//!
//! - **Path normalization** - Trailing slash handling, before routing
//! - **Pipeline** - Error boundary, authentication, logging around the whole
//!   router, fallbacks included (see [`crate::api::pipeline`])

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::pipeline;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and pipeline stages.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::user_routes()
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(pipeline::apply(router))
}
