mod app;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotesd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Connect storage and create application state
    let state = init_state(&config).await?;

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise bind to the configured port
        None => {
            let addr = format!("0.0.0.0:{}", config.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connect to MySQL, ensure the schema exists, and build the shared state
/// around the pool. Fatal if the database never becomes reachable.
#[cfg(feature = "mysql")]
async fn init_state(config: &Config) -> Result<AppState> {
    use std::sync::Arc;

    use crate::storage::mysql::MySqlRepository;

    let repo = MySqlRepository::connect(config).await?;

    Ok(AppState::new(Arc::new(repo)))
}

/// Build the shared state around the in-memory store.
#[cfg(feature = "inmemory")]
async fn init_state(_config: &Config) -> Result<AppState> {
    use std::sync::Arc;

    use crate::storage::inmemory::InMemoryRepository;

    tracing::warn!("Using in-memory storage; quotes are lost on restart");

    Ok(AppState::new(Arc::new(InMemoryRepository::new())))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
