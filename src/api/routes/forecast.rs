//! Forecast Routes
//!
//! The simulated outbreak forecaster and the report export.
//!
//! - GET /api/v1/forecast - Current 7-day projection
//! - POST /api/v1/forecast/run - Regenerate ("Run Forecast")
//! - GET /api/v1/forecast/export - Download the report as JSON

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ForecastResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::report::ForecastReport;

/// GET /api/v1/forecast
pub async fn get_forecast(State(state): State<Arc<AppState>>) -> Json<ForecastResponse> {
    let snapshot = state.snapshot().await;
    Json(ForecastResponse {
        predictions: snapshot.forecast,
        current_conditions: snapshot.civic,
        generated_at: snapshot.generated_at,
    })
}

/// POST /api/v1/forecast/run
///
/// Same generator as the dashboard refresh; the forecaster view just frames
/// it as running the model.
pub async fn run_forecast(State(state): State<Arc<AppState>>) -> Json<ForecastResponse> {
    let snapshot = state.refresh_snapshot().await;
    tracing::info!(
        risk_level = %snapshot.civic.risk_level,
        confidence = snapshot.civic.confidence,
        "Forecast regenerated"
    );
    Json(ForecastResponse {
        predictions: snapshot.forecast,
        current_conditions: snapshot.civic,
        generated_at: snapshot.generated_at,
    })
}

/// GET /api/v1/forecast/export
///
/// Serve the report for the snapshot current at export time as a
/// downloadable JSON attachment.
pub async fn export_report(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let snapshot = state.snapshot().await;
    let report = ForecastReport::from_snapshot(&snapshot);

    let body = report
        .to_json_pretty()
        .map_err(|e| ApiError::Internal(format!("Failed to serialize report: {}", e)))?;

    let disposition = format!("attachment; filename=\"{}\"", report.filename());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from(body),
    )
        .into_response())
}
