//! reminders-api server entry point.
//!
//! Starts the Axum HTTP server and the daily reminder scheduler, and stops
//! both on Ctrl-C.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use reminders_api::api;
use reminders_api::app_state::AppState;
use reminders_api::config::ReminderConfig;
use reminders_api::mail::SmtpMailer;
use reminders_api::persistence::seed::seed_if_empty;
use reminders_api::persistence::{EventStore, SqliteEventStore};
use reminders_api::reminder::{DailyScheduler, Notifier};
use reminders_api::service::EventService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration; any error here is fatal
    let config = ReminderConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, db_path = %config.db_path, "starting reminders-api");
    let mailer = Arc::new(SmtpMailer::from_config(&config)?);

    // Build persistence layer
    let store =
        SqliteEventStore::connect(&config.db_path, config.database_max_connections).await?;
    store.init().await?;
    match seed_if_empty(&store, &config.seed_file).await {
        Ok(0) => {}
        Ok(count) => tracing::info!(count, "loaded initial events"),
        Err(e) => tracing::warn!(error = %e, "initial events not loaded"),
    }
    let store: Arc<dyn EventStore> = Arc::new(store);

    // Build service layer
    let event_service = Arc::new(EventService::new(Arc::clone(&store)));
    let notifier = Arc::new(Notifier::new(mailer));

    // Start the reminder loop
    let scheduler = DailyScheduler::new(Arc::clone(&event_service), notifier).spawn();

    // Build router
    let app = api::build_router(AppState::new(event_service, config.api_key.as_str()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.stop().await;
    store.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
