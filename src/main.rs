use folio::api::{self, app_state::AppState};
use folio::config::loader::ConfigLoader;
use folio::faq::create_faq_responder;
use folio::observability::{
    AppMetrics, HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use folio::services::{
    ResumeService, create_chat_backend, create_chat_service, create_contact_service,
    create_preference_store,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load()?;
    let _log_guard = init_tracing(&config.logging)?;
    ConfigLoader::validate(&config)?;
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let metrics = Arc::new(AppMetrics::default());

    let faq = Arc::new(create_faq_responder(config.chat.corpus_path.as_deref())?);
    info!("FAQ responder initialized");

    let backend = create_chat_backend(
        config.chat.remote_backend_url.as_deref(),
        config.chat.remote_timeout_secs,
    )?;
    let chat_service = create_chat_service(
        faq.clone(),
        backend,
        config.chat.project_showcase,
        metrics.clone(),
    );
    info!("Chat service initialized");

    let contact_service =
        create_contact_service(config.contact.endpoint.as_deref(), config.contact.timeout_secs)?;
    let resume_service = ResumeService::new(config.resume.dir.clone());

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION"),
        metrics.clone(),
    ));
    observability_state
        .add_health_check(HealthCheckResult::healthy(
            "faq_corpus",
            format!("{} entries", faq.corpus().len()),
        ))
        .await;
    let resume_check = if resume_service.dir().is_dir() {
        HealthCheckResult::healthy("resume_dir", resume_service.dir().display().to_string())
    } else {
        warn!(
            "Resume directory {} does not exist",
            resume_service.dir().display()
        );
        HealthCheckResult::unhealthy("resume_dir", "directory missing")
    };
    observability_state.add_health_check(resume_check).await;

    let app_state = AppState::new(
        chat_service,
        faq,
        create_preference_store(config.preferences.max_clients),
        resume_service,
        contact_service,
        metrics,
    );
    info!("Application state created");

    let router = api::create_router(
        app_state,
        create_observability_router(observability_state),
        &config.security,
    )
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout,
    )));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
