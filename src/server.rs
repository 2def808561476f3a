//! Static host for the built page.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serves the site root. Unknown paths get `index.html` with a 404 status.
pub fn router(config: &ServerConfig) -> Router {
    let files = ServeDir::new(&config.site_root)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(config.index_file()));

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(config.site_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.site_addr,
            source,
        })?;
    tracing::info!(
        addr = %config.site_addr,
        root = %config.site_root.display(),
        "serving landing page"
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
