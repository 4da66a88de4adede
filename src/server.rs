//! HTTP server initialization and runtime setup.
//!
//! Wires the link store, id generator and link service together, serves the
//! Axum router and shuts everything down on Ctrl-C or SIGTERM.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::Base62Generator;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// Builds application state around a fresh in-memory store.
///
/// `shutdown` aborts id searches still in progress once it turns `true`.
pub fn build_state(
    config: &Config,
    link_repository: Arc<InMemoryLinkRepository>,
    shutdown: watch::Receiver<bool>,
) -> AppState {
    let id_generator = Arc::new(Base62Generator::new(config.id_length));
    let link_service = LinkService::new(link_repository.clone(), id_generator, config.max_attempts)
        .with_shutdown(shutdown);

    AppState::new(
        Arc::new(link_service),
        link_repository,
        config.base_url.as_str(),
        config.id_length,
    )
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
/// - The link store fails to close
pub async fn run(config: Config) -> Result<()> {
    let link_repository = Arc::new(InMemoryLinkRepository::new());
    tracing::info!("In-memory link store created");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let state = build_state(&config, link_repository.clone(), shutdown_rx);

    let app = app_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .context("Server error")?;

    link_repository
        .close()
        .await
        .context("Failed to close link store")?;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM and tells in-flight requests to stop.
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
    let _ = shutdown_tx.send(true);
}
