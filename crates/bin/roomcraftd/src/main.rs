//! # roomcraftd — roomcraft daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`roomcraft.toml`, environment overrides)
//! - Initialise `tracing` from the configured filter
//! - Open the `SQLite` document store and run migrations
//! - Construct repositories, inject them into services, build the axum router
//! - Bind to a TCP port and serve until SIGINT/SIGTERM, then close the store
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use roomcraft_adapter_http_axum::cors::CorsConfig;
use roomcraft_adapter_http_axum::state::AppState;
use roomcraft_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteCatalogRepository, SqliteDesignRepository,
};
use roomcraft_app::services::catalog_service::CatalogService;
use roomcraft_app::services::design_service::DesignService;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();
    tracing::info!("document store ready");

    // Repositories
    let design_repo = SqliteDesignRepository::new(pool.clone());
    let catalog_repo = SqliteCatalogRepository::new(pool);

    // Services
    let design_service = DesignService::new(design_repo);
    let catalog_service = CatalogService::new(catalog_repo);

    // HTTP
    let state = AppState::new(design_service, catalog_service);
    let cors = CorsConfig::new(&config.cors.allowed_origin)?;
    let app = roomcraft_adapter_http_axum::router::build(state, &cors);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, origin = %config.cors.allowed_origin, "roomcraftd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down, closing document store");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
        tracing::info!("received ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
