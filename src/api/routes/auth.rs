//! Auth Routes
//!
//! Simulated login: any non-empty email and password succeed after a fixed
//! delay. There is no real authentication anywhere in the system; the token
//! returned is never checked.
//!
//! - POST /api/v1/auth/login

use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Duration;

use crate::api::dto::{LoginRequest, LoginResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let delay = state.config.auth.login_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if req.email.trim().is_empty() || req.password.trim().is_empty() {
        return Err(ApiError::Validation(
            "Please enter valid credentials".to_string(),
        ));
    }

    tracing::info!(email = %req.email, "Simulated login succeeded");
    Ok(Json(LoginResponse {
        status: "ok".to_string(),
        token: uuid::Uuid::new_v4().to_string(),
        message: "Welcome to M-Pulse Admin Panel".to_string(),
    }))
}
