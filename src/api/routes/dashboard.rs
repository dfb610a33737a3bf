//! Dashboard Routes
//!
//! The main command view: the current civic snapshot and manual refresh.
//!
//! - GET /api/v1/dashboard - Current civic data
//! - POST /api/v1/dashboard/refresh - Regenerate the snapshot now

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{DashboardResponse, RefreshResponse};
use crate::api::state::AppState;

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let snapshot = state.snapshot().await;
    Json(DashboardResponse {
        aqi_label: snapshot.civic.aqi_label().to_string(),
        civic_data: snapshot.civic,
        last_updated: snapshot.generated_at,
    })
}

/// POST /api/v1/dashboard/refresh
///
/// The "Update Data" action. Regenerates the whole snapshot; concurrent
/// refreshes are last-write-wins.
pub async fn refresh_dashboard(State(state): State<Arc<AppState>>) -> Json<RefreshResponse> {
    let snapshot = state.refresh_snapshot().await;
    let message = format!(
        "Risk level: {} | Confidence: {}%",
        snapshot.civic.risk_level.to_string().to_uppercase(),
        snapshot.civic.confidence
    );
    Json(RefreshResponse {
        status: "updated".to_string(),
        civic_data: snapshot.civic,
        last_updated: snapshot.generated_at,
        message,
    })
}
