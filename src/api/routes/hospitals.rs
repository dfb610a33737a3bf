//! Hospital Routes
//!
//! The hospital command center. Fixtures are read-only; the allocation and
//! resource-request actions return canned acknowledgements and change no
//! state, matching the original system.
//!
//! - GET /api/v1/hospitals - List with network summary
//! - GET /api/v1/hospitals/:id - Single hospital detail
//! - POST /api/v1/hospitals/allocate - Canned allocation recommendation
//! - POST /api/v1/hospitals/:id/resources - Canned resource-request ack

use axum::{extract::Path, Json};

use crate::api::dto::{
    AllocationResponse, HospitalDetailResponse, HospitalListResponse, ResourceRequestResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::model::{fleet_summary, hospitals};

/// GET /api/v1/hospitals
pub async fn list_hospitals() -> Json<HospitalListResponse> {
    let list = hospitals();
    let summary = fleet_summary(&list);
    Json(HospitalListResponse {
        hospitals: list,
        summary,
    })
}

/// GET /api/v1/hospitals/:id
pub async fn get_hospital(Path(id): Path<String>) -> ApiResult<Json<HospitalDetailResponse>> {
    let hospital = hospitals()
        .into_iter()
        .find(|h| h.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("hospital '{}'", id)))?;

    let occupancy_rate = hospital.occupancy_rate();
    Ok(Json(HospitalDetailResponse {
        hospital,
        occupancy_rate,
    }))
}

/// POST /api/v1/hospitals/allocate
///
/// The "Auto-Allocate Resources" action. Returns the canned recommendation;
/// no bed or doctor count changes.
pub async fn auto_allocate() -> Json<AllocationResponse> {
    tracing::info!("Auto-allocation requested");
    Json(AllocationResponse {
        status: "completed".to_string(),
        message: "Recommended 15 doctors to Sion Hospital, 8 beds freed at Cooper Hospital."
            .to_string(),
    })
}

/// POST /api/v1/hospitals/:id/resources
///
/// The "Request Resources" action from the detail view. Simulated; nothing
/// is dispatched.
pub async fn request_resources(
    Path(id): Path<String>,
) -> ApiResult<Json<ResourceRequestResponse>> {
    let hospital = hospitals()
        .into_iter()
        .find(|h| h.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("hospital '{}'", id)))?;

    tracing::info!(hospital = %hospital.name, "Resource request acknowledged");
    Ok(Json(ResourceRequestResponse {
        status: "acknowledged".to_string(),
        message: format!(
            "Resource request for {} logged; command staff notified.",
            hospital.name
        ),
        hospital: hospital.name,
    }))
}
