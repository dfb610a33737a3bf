//! M-Pulse REST API
//!
//! HTTP API layer for the health command system, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Current civic snapshot
//! - `POST /api/v1/dashboard/refresh` - Regenerate the snapshot
//!
//! ## Forecaster
//! - `GET /api/v1/forecast` - Current 7-day projection
//! - `POST /api/v1/forecast/run` - Regenerate
//! - `GET /api/v1/forecast/export` - Download the report as JSON
//!
//! ## Hospitals
//! - `GET /api/v1/hospitals` - List with network summary
//! - `GET /api/v1/hospitals/:id` - Single hospital
//! - `POST /api/v1/hospitals/allocate` - Canned allocation recommendation
//! - `POST /api/v1/hospitals/:id/resources` - Canned resource-request ack
//!
//! ## Advisories
//! - `GET /api/v1/advisories?lang=` - Advisories in one language
//! - `POST /api/v1/advisories/:id/broadcast` - Simulated broadcast
//!
//! ## Assistant
//! - `POST /api/v1/assistant/message` - Send a message
//! - `GET /api/v1/assistant/history` - Conversation history
//! - `POST /api/v1/assistant/clear` - Reset to the greeting
//!
//! ## Auth & Map
//! - `POST /api/v1/auth/login` - Simulated login
//! - `PUT /api/v1/map/token` - Store the map provider token
//! - `GET /api/v1/map` - Map view model
//!
//! ## Health
//! - `GET /health/live`, `GET /health/ready`, `GET /health`

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/dashboard/refresh", post(routes::dashboard::refresh_dashboard))
        // Forecast routes
        .route("/forecast", get(routes::forecast::get_forecast))
        .route("/forecast/run", post(routes::forecast::run_forecast))
        .route("/forecast/export", get(routes::forecast::export_report))
        // Hospital routes
        .route("/hospitals", get(routes::hospitals::list_hospitals))
        .route("/hospitals/allocate", post(routes::hospitals::auto_allocate))
        .route("/hospitals/:id", get(routes::hospitals::get_hospital))
        .route("/hospitals/:id/resources", post(routes::hospitals::request_resources))
        // Advisory routes
        .route("/advisories", get(routes::advisories::list_advisories))
        .route("/advisories/:id/broadcast", post(routes::advisories::broadcast_advisory))
        // Assistant routes
        .route("/assistant/message", post(routes::assistant::send_message))
        .route("/assistant/history", get(routes::assistant::get_history))
        .route("/assistant/clear", post(routes::assistant::clear_history))
        // Auth routes
        .route("/auth/login", post(routes::auth::login))
        // Map routes
        .route("/map", get(routes::map::get_map))
        .route("/map/token", put(routes::map::set_token));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the API server
pub async fn serve(state: Arc<AppState>) -> Result<(), ApiError> {
    let addr = state.config.api.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("M-Pulse API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("M-Pulse API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
