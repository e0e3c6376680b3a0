//! Capability assessment server.
//!
//! Serves the questionnaire and assessment API on a local address.
//! Assessments live in process memory only.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use capability_assessment::adapters::http::{app_router, AssessmentAppState};
use capability_assessment::adapters::{InMemoryAssessmentRepository, TracingEventPublisher};
use capability_assessment::config::AppConfig;
use capability_assessment::domain::questionnaire::Questionnaire;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let catalog = Arc::new(Questionnaire::embedded()?);
    tracing::info!(
        title = catalog.title(),
        questions = catalog.question_count(),
        "Questionnaire loaded"
    );

    let mut state = AssessmentAppState::new(
        Arc::new(InMemoryAssessmentRepository::new()),
        Arc::new(TracingEventPublisher::new()),
        catalog,
    );
    state.chart_style = config.report.chart_style();
    state.text_width = config.report.text_width;
    state.emit_focus_requests = config.features.emit_focus_requests;
    state.verbose_errors = config.features.verbose_errors;

    let app = app_router(state, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    if !config.server.is_loopback() {
        tracing::warn!(%addr, "Listening on a non-loopback address; assessments are unauthenticated");
    }
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
