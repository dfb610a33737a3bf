//! Map Routes
//!
//! The hospital network map. The provider access token is user-supplied at
//! runtime, held only in memory, and never validated upstream. Requesting
//! the map view before a token is set is the one handled failure in the
//! system and surfaces as a MAP_UNAVAILABLE error.
//!
//! - PUT /api/v1/map/token - Store the provider token
//! - GET /api/v1/map - Map view model with hospital markers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{MapMarker, MapTokenRequest, MapTokenResponse, MapViewResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::model::hospitals;

/// Mumbai city center (longitude, latitude)
const MUMBAI_CENTER: [f64; 2] = [72.8777, 19.0760];
const DEFAULT_ZOOM: f64 = 11.0;
const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/light-v11";

/// PUT /api/v1/map/token
pub async fn set_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MapTokenRequest>,
) -> ApiResult<Json<MapTokenResponse>> {
    if req.token.trim().is_empty() {
        return Err(ApiError::Validation("token cannot be empty".to_string()));
    }

    state.set_map_token(req.token).await;
    tracing::info!("Map provider token configured");
    Ok(Json(MapTokenResponse {
        status: "configured".to_string(),
    }))
}

/// GET /api/v1/map
pub async fn get_map(State(state): State<Arc<AppState>>) -> ApiResult<Json<MapViewResponse>> {
    if !state.has_map_token().await {
        return Err(ApiError::MapUnavailable(
            "no map provider token configured; set one via PUT /api/v1/map/token".to_string(),
        ));
    }

    let markers = hospitals()
        .into_iter()
        .map(|h| MapMarker {
            color: h.alert_level.marker_color().to_string(),
            id: h.id,
            name: h.name,
            ward: h.ward,
            coordinates: h.coordinates,
            alert_level: h.alert_level,
            beds_available: h.beds_available,
            total_beds: h.total_beds,
            doctors_on_duty: h.doctors_on_duty,
        })
        .collect();

    Ok(Json(MapViewResponse {
        center: MUMBAI_CENTER,
        zoom: DEFAULT_ZOOM,
        style: DEFAULT_STYLE.to_string(),
        markers,
    }))
}
