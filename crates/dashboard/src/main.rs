mod app;
mod cache;
mod config;
mod handlers;
mod mock_data;
mod state;
mod storage;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dashboard_auth::{AuthConfig, AuthState, MemorySessionStore, SqliteSessionStore};
use dashboard_core::auth::SessionRepository;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    cache::MemoryCache,
    config::{Config, SessionBackend},
    state::AppState,
    storage::sqlite::{self, SqliteRepository},
};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Acme Dashboard - invoices, customers and the people who bill them
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Insert placeholder users, customers and invoices before serving
    #[arg(long, env = "SEED")]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dashboard=debug,dashboard_auth=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let auth_config = AuthConfig::from_env();

    tracing::info!(
        database = %config.database_url,
        session_store = ?config.session_backend,
        cache_ttl_seconds = config.cache_ttl_seconds,
        cache_max_entries = config.cache_max_entries,
        "Starting dashboard"
    );

    let pool = sqlite::connect(&config.database_url).await?;
    let repo = Arc::new(SqliteRepository::new(pool.clone()));
    repo.migrate().await?;

    if cli.seed {
        mock_data::seed(repo.as_ref()).await?;
    }

    let sessions: Arc<dyn SessionRepository> = match config.session_backend {
        SessionBackend::Sqlite => {
            let store = SqliteSessionStore::new(pool);
            store.migrate().await?;
            spawn_sqlite_session_sweeper(store.clone());
            Arc::new(store)
        }
        SessionBackend::Memory => {
            let store = MemorySessionStore::new();
            spawn_memory_session_sweeper(store.clone());
            Arc::new(store)
        }
    };

    let auth = AuthState::new(sessions, repo.clone(), auth_config);
    let state = AppState::new(
        repo.clone(),
        repo,
        Arc::new(MemoryCache::new(config.cache_max_entries)),
        auth,
        config.cache_ttl(),
    );

    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Removes expired sessions at startup and then every hour.
fn spawn_sqlite_session_sweeper(store: SqliteSessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            match store.purge_expired().await {
                Ok(purged) => tracing::debug!(purged, "Removed expired sessions"),
                Err(e) => tracing::warn!(error = %e, "Failed to purge expired sessions"),
            }
        }
    });
}

fn spawn_memory_session_sweeper(store: MemorySessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            tracing::debug!(purged, "Removed expired sessions");
        }
    });
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
