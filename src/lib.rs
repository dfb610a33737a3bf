//! # M-Pulse
//!
//! Mumbai Health Command System - a self-contained mock public-health command
//! API. Visualization data for hospital capacity, a simulated outbreak
//! forecast, public advisories, and a canned assistant, served over HTTP.
//!
//! Everything here is mock data: readings are randomized on a timer, the
//! "model" is a set of threshold rules, the assistant is a keyword table, and
//! login is simulated. There is no persistence and no external dependency.
//!
//! ## Modules
//!
//! - [`model`]: Domain types and static hospital/advisory fixtures
//! - [`generator`]: Randomized civic snapshot and 7-day forecast
//! - [`assistant`]: Keyword-matched responder and conversation history
//! - [`report`]: The exported forecast report artifact
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mpulse::api::{serve, AppState};
//! use mpulse::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = Arc::new(AppState::new(Config::default()));
//!     AppState::start_periodic_refresh(Arc::clone(&state));
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod assistant;
pub mod config;
pub mod generator;
pub mod model;
pub mod report;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use assistant::{respond, Conversation, Role, Turn, DEFAULT_RESPONSE, GREETING};

pub use config::{Config, ConfigError};

pub use generator::{generate_civic_data, generate_forecast, generate_snapshot, Snapshot};

pub use model::{
    advisories, fleet_summary, hospitals, Advisory, AlertLevel, CivicData, DayPrediction,
    EventDensity, FleetSummary, Hospital, Language, RiskLevel,
};

pub use report::ForecastReport;
