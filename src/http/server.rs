use tokio::{net::TcpListener, signal};

use super::router::routes;
use crate::config::ServerConfig;

/// Binds the configured address and serves the API until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await.map_err(|e| {
        log::error!("Failed to bind {}: {}", config.bind_addr(), e);
        e
    })?;
    serve_with_listener(listener).await
}

pub async fn serve_with_listener(listener: TcpListener) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    log::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, routes())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("HTTP server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("HTTP server received shutdown signal");
}
