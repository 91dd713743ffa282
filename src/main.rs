//! queue-watch server entry point.
//!
//! Starts the refresh scheduler and the Axum HTTP snapshot surface.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use queue_watch::api;
use queue_watch::app_state::AppState;
use queue_watch::config::MonitorConfig;
use queue_watch::display::LogDisplay;
use queue_watch::domain::SnapshotBus;
use queue_watch::persistence::mysql::MySqlTicketStore;
use queue_watch::service::RefreshScheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = MonitorConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, queue_id = config.queue_id, "starting queue-watch");

    // Connect to the ticket store
    let store = MySqlTicketStore::connect(&config).await?;

    // Build the pipeline
    let bus = SnapshotBus::new();
    let scheduler = RefreshScheduler::new(
        Arc::new(store),
        Arc::new(LogDisplay),
        bus.clone(),
        &config,
    );
    tokio::spawn(async move { scheduler.run().await });

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { bus });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
