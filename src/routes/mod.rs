//! HTTP route handlers.
//!
//! Exactly one route is registered: the root path serving the greeting.
//! Requests to any other path fall through to the framework's default
//! 404 handler, and non-GET methods on the root path get the
//! framework's default 405 response. Nothing here overrides those.
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request, allowing correlation of all
//! logs within a request.

pub mod greeting;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with the root route.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greeting::index))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
