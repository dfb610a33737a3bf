//! Advisory Routes
//!
//! The public advisory system. Advisories are static fixtures rendered in
//! the requested language; broadcasting is simulated and delivers nothing.
//!
//! - GET /api/v1/advisories?lang= - List advisories in one language
//! - POST /api/v1/advisories/:id/broadcast - Simulated broadcast ack

use axum::{
    extract::{Path, Query},
    Json,
};

use crate::api::dto::{AdvisoriesResponse, AdvisoryParams, BroadcastResponse, LocalizedAdvisory};
use crate::api::error::{ApiError, ApiResult};
use crate::model::{advisories, Language};

/// GET /api/v1/advisories
///
/// Unknown language codes are rejected rather than silently falling back.
pub async fn list_advisories(
    Query(params): Query<AdvisoryParams>,
) -> ApiResult<Json<AdvisoriesResponse>> {
    let language = match params.lang.as_deref() {
        None => Language::En,
        Some(code) => code
            .parse::<Language>()
            .map_err(ApiError::Validation)?,
    };

    let advisories = advisories()
        .into_iter()
        .map(|advisory| {
            // Fixtures carry all three translations; missing text is a
            // fixture bug, not a runtime condition.
            let message = advisory.message(language).unwrap_or_default().to_string();
            LocalizedAdvisory {
                id: advisory.id,
                title: advisory.title,
                severity: advisory.severity,
                wards: advisory.wards,
                language,
                message,
            }
        })
        .collect();

    Ok(Json(AdvisoriesResponse {
        advisories,
        language,
    }))
}

/// POST /api/v1/advisories/:id/broadcast
///
/// The "Send Alert" action: acknowledges which wards and channels the alert
/// would have gone out on. No SMS or notification is actually sent.
pub async fn broadcast_advisory(Path(id): Path<String>) -> ApiResult<Json<BroadcastResponse>> {
    let advisory = advisories()
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("advisory '{}'", id)))?;

    tracing::info!(advisory = %advisory.id, wards = ?advisory.wards, "Advisory broadcast simulated");
    Ok(Json(BroadcastResponse {
        status: "sent".to_string(),
        advisory_id: advisory.id,
        message: format!(
            "SMS and app notifications triggered to {} affected wards",
            advisory.wards.len()
        ),
        wards: advisory.wards,
        channels: vec!["sms".to_string(), "app".to_string()],
    }))
}
