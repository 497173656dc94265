mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use listenfd::ListenFd;
use portico_auth::{AuthConfig, AuthState};
use portico_core::auth::{self, Authenticator, Credentials};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(feature = "sqlite"))]
use portico_core::storage::TableStore;

use crate::{app::create_app, config::Config, state::AppState};

/// Portico - hexagonal-architecture web API skeleton
#[derive(Parser, Debug)]
#[command(name = "portico")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8000", env = "PORT")]
    port: u16,
}

/// Identity-verification stub: rejects every credential pair.
///
/// A real deployment replaces this with its user lookup and password
/// verification; nothing in this repository knows how to do either.
struct UnimplementedAuthenticator;

#[async_trait]
impl Authenticator for UnimplementedAuthenticator {
    async fn authenticate(&self, _credentials: &Credentials) -> auth::Result<Option<i64>> {
        Ok(None)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portico=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let auth_config = AuthConfig::from_env()?;

    #[cfg(feature = "sqlite")]
    let store = Arc::new(storage::SqliteTableStore::open(&config.sqlite_path).await?);

    #[cfg(not(feature = "sqlite"))]
    let store: Arc<dyn TableStore> = Arc::new(storage::InMemoryTableStore::new());

    let auth = AuthState::new(auth_config, Arc::new(UnimplementedAuthenticator));
    let state = AppState::new(store, auth);

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
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
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
