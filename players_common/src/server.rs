use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Wrap a service router with the layers both services share.
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve until Ctrl-C.
pub async fn serve(router: Router, config: ServerConfig) -> std::io::Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, with_middleware(router))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::warn!("received SIGINT, shutting down"),
        Err(error) => tracing::error!(%error, "failed to listen for SIGINT"),
    }
}
