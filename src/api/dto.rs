//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assistant::Turn;
use crate::model::{AlertLevel, CivicData, DayPrediction, FleetSummary, Hospital, Language};

// ============================================
// DASHBOARD DTOs
// ============================================

/// Current civic snapshot as shown on the dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub civic_data: CivicData,
    /// Qualitative AQI band for display
    pub aqi_label: String,
    pub last_updated: DateTime<Utc>,
}

/// Manual refresh response
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: String,
    pub civic_data: CivicData,
    pub last_updated: DateTime<Utc>,
    /// Toast-style summary line
    pub message: String,
}

// ============================================
// FORECAST DTOs
// ============================================

/// 7-day forecast with the conditions it was derived from
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub predictions: Vec<DayPrediction>,
    pub current_conditions: CivicData,
    pub generated_at: DateTime<Utc>,
}

// ============================================
// HOSPITAL DTOs
// ============================================

/// Hospital list with network summary
#[derive(Debug, Serialize)]
pub struct HospitalListResponse {
    pub hospitals: Vec<Hospital>,
    pub summary: FleetSummary,
}

/// Single hospital detail
#[derive(Debug, Serialize)]
pub struct HospitalDetailResponse {
    #[serde(flatten)]
    pub hospital: Hospital,
    pub occupancy_rate: u32,
}

/// Canned auto-allocation recommendation (mutates nothing)
#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub status: String,
    pub message: String,
}

/// Canned resource-request acknowledgement (mutates nothing)
#[derive(Debug, Serialize)]
pub struct ResourceRequestResponse {
    pub status: String,
    pub hospital: String,
    pub message: String,
}

// ============================================
// ADVISORY DTOs
// ============================================

/// Advisory list query parameters
#[derive(Debug, Deserialize)]
pub struct AdvisoryParams {
    /// Language code: en, hi, mr (default: en)
    #[serde(default)]
    pub lang: Option<String>,
}

/// One advisory rendered in a single language
#[derive(Debug, Serialize)]
pub struct LocalizedAdvisory {
    pub id: String,
    pub title: String,
    pub severity: AlertLevel,
    pub wards: Vec<String>,
    pub language: Language,
    pub message: String,
}

/// Advisory list response
#[derive(Debug, Serialize)]
pub struct AdvisoriesResponse {
    pub advisories: Vec<LocalizedAdvisory>,
    pub language: Language,
}

/// Simulated broadcast acknowledgement
#[derive(Debug, Serialize)]
pub struct BroadcastResponse {
    pub status: String,
    pub advisory_id: String,
    pub wards: Vec<String>,
    /// Channels the broadcast would have gone out on
    pub channels: Vec<String>,
    pub message: String,
}

// ============================================
// ASSISTANT DTOs
// ============================================

/// Assistant message request
#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
}

/// Assistant reply
#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub reply: String,
}

/// Full conversation history
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub turns: Vec<Turn>,
}

// ============================================
// AUTH DTOs
// ============================================

/// Simulated login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Simulated login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
    /// Opaque in-memory session token; never checked anywhere
    pub token: String,
    pub message: String,
}

// ============================================
// MAP DTOs
// ============================================

/// Map token request
#[derive(Debug, Deserialize)]
pub struct MapTokenRequest {
    pub token: String,
}

/// Map token acknowledgement
#[derive(Debug, Serialize)]
pub struct MapTokenResponse {
    pub status: String,
}

/// Map view model
#[derive(Debug, Serialize)]
pub struct MapViewResponse {
    /// Longitude, latitude of the map center
    pub center: [f64; 2],
    pub zoom: f64,
    pub style: String,
    pub markers: Vec<MapMarker>,
}

/// One hospital marker on the map
#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub name: String,
    pub ward: String,
    pub coordinates: [f64; 2],
    pub alert_level: AlertLevel,
    /// Marker color derived from the alert level
    pub color: String,
    pub beds_available: u32,
    pub total_beds: u32,
    pub doctors_on_duty: u32,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: always "healthy" (no external dependencies)
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Seconds since the snapshot was last regenerated
    pub snapshot_age_seconds: i64,
    /// Application version
    pub version: String,
}
