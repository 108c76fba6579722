//! Application entry point and server initialization
//!
//! Loads configuration, opens the mapping store and serves the router until
//! SIGINT or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use shortlink::config::AppConfig;
use shortlink::database::{init_db, RedbStore};
use shortlink::generator::UuidGenerator;
use shortlink::route::create_app;
use shortlink::service::MappingService;
use shortlink::state::AppState;

/// # Environment Variables
///
/// - `TABLE_NAME` - Mapping table name (required)
/// - `PORT` - Server port number (default: 8080)
/// - `DATABASE_URL` - Path to database file (default: "data.db")
/// - `RUST_LOG` - Log filter (default: "shortlink=debug,tower_http=debug")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shortlink=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let db = init_db(&config.database_url, &config.table_name)
        .with_context(|| format!("failed to initialize database {}", config.database_url))?;
    let store = RedbStore::new(Arc::new(db), config.table_name.clone());
    let service = MappingService::new(Arc::new(store), Arc::new(UuidGenerator));

    let app = create_app(AppState::new(service)).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        listen_addr = %listener.local_addr()?,
        database = %config.database_url,
        table = %config.table_name,
        "server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
///
/// In-flight requests finish before the process exits, so a redb commit is
/// never cut off halfway.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received, stopping server");
}
