//! Root greeting endpoint.

use axum::response::Html;

/// The greeting returned for every request to the root path.
pub const GREETING: &str =
    "Hello, this is Sushmitha's custom Flask app running in Docker via Ansible!";

/// Root handler.
///
/// Returns the fixed greeting with an HTML content type. Nothing is
/// read from the request and nothing is mutated.
pub async fn index() -> Html<&'static str> {
    Html(GREETING)
}
