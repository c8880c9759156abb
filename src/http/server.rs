//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down. Shutdown is
/// triggered by SIGTERM or Ctrl+C, after which in-flight connections
/// are drained.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr_string = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = addr_string.parse().map_err(|source| ServerError::Addr {
        addr: addr_string,
        source,
    })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    // Report the address actually bound (relevant when port 0 was requested)
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("Starting server at http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
