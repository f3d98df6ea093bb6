use anyhow::Context;
use folio::api::{self, app_state::AppState};
use folio::config::loader::ConfigLoader;
use folio::observability::{
    AppMetrics, HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use folio::services::contact::LogNotifier;
use folio::services::remote::create_remote_assistant;
use folio::storage::profile_loader::ProfileLoader;
use folio::storage::repository::{InMemoryChatHistory, InMemoryContactInbox};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config)?;

    let _log_guard = init_tracing(&config.logging, &config.app_name);
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let profile = ProfileLoader::load(&config.profile.path)
        .with_context(|| format!("failed to load profile {}", config.profile.path.display()))?;
    info!("Profile loaded for {}", profile.personal.name);

    let remote = create_remote_assistant(&config.assistant)?;
    match &config.assistant.remote_url {
        Some(url) => info!("Remote assistant enabled: {}", url),
        None => info!("Remote assistant disabled, answering locally"),
    }

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(
        &config,
        profile.clone(),
        remote,
        Arc::new(InMemoryChatHistory::from_config(&config.chat)),
        Arc::new(InMemoryContactInbox::new(config.contact.inbox_capacity)),
        Arc::new(LogNotifier),
        metrics.clone(),
    );
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION"),
        metrics,
    ));
    observability_state
        .set_health_check(HealthCheckResult::healthy(
            "profile",
            &format!("{} projects loaded", profile.projects.len()),
        ))
        .await;

    let router = create_observability_router(observability_state)
        .merge(api::create_router(app_state, &config.server));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
