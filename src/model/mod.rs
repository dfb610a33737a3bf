//! Core domain types for the M-Pulse health command system
//!
//! This module defines the data model shared across the service:
//! - [`CivicData`]: a randomized snapshot of environmental/social readings
//! - [`DayPrediction`]: one day of the simulated outbreak forecast
//! - [`Hospital`]: static hospital fixtures with capacity and staffing
//! - [`Advisory`]: static public advisories with per-language translations
//!
//! All of this is mock data. Hospitals and advisories are fixed seed data
//! that no operation ever mutates; civic data and forecasts are regenerated
//! wholesale by the [`crate::generator`] module.

pub mod advisory;
pub mod civic;
pub mod hospital;

pub use advisory::{advisories, Advisory, Language};
pub use civic::{CivicData, DayPrediction, EventDensity, RiskLevel};
pub use hospital::{fleet_summary, hospitals, AlertLevel, FleetSummary, Hospital};
