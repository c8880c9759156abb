//! Greeter: a single-route greeting web service.
//!
//! Serves a fixed greeting at the root path and nothing else. Unknown
//! paths get the framework's default 404 response, and non-GET methods
//! on the root path get the framework's default 405.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
