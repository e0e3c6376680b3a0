//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the feature routers with the cross-cutting
//! tower-http layers (tracing, CORS, timeout).

pub mod assessment;

pub use assessment::{assessment_router, AssessmentApiError, AssessmentAppState};

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

use assessment::dto::HealthResponse;

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the full application router.
pub fn app_router(state: AssessmentAppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .merge(assessment_router())
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    if config.features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !config.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
