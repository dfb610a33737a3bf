//! Civic data and forecast types
//!
//! A `CivicData` snapshot bundles the environmental and social readings the
//! forecaster uses as its fictional basis: rainfall, air quality, and event
//! density, plus the derived risk assessment. Snapshots are immutable; a
//! refresh produces a whole new value and discards the old one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Three-tier outbreak risk classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Density of public gatherings (festivals, rallies, markets)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventDensity {
    Low,
    Normal,
    High,
}

impl EventDensity {
    /// All variants, for uniform sampling
    pub fn all() -> &'static [EventDensity] {
        &[EventDensity::Low, EventDensity::Normal, EventDensity::High]
    }
}

impl std::fmt::Display for EventDensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventDensity::Low => write!(f, "Low"),
            EventDensity::Normal => write!(f, "Normal"),
            EventDensity::High => write!(f, "High"),
        }
    }
}

/// One randomized snapshot of civic and environmental readings
///
/// Regenerated wholesale on each refresh. The risk level and outbreak label
/// are derived from threshold rules over rainfall and AQI, not from any model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CivicData {
    /// Rainfall over the last 24 hours, millimetres (0..=150)
    pub rainfall_mm: f64,
    /// Air quality index (40..=300)
    pub aqi: u32,
    /// Density of public gatherings
    pub event_density: EventDensity,
    /// Human-readable outbreak label derived from the readings
    pub predicted_outbreak: String,
    /// Risk tier derived from the readings
    pub risk_level: RiskLevel,
    /// Simulated model confidence, percent (70..=95)
    pub confidence: u8,
}

impl CivicData {
    /// Qualitative AQI banding as shown on the dashboard
    pub fn aqi_label(&self) -> &'static str {
        if self.aqi > 200 {
            "Poor"
        } else if self.aqi > 150 {
            "Moderate"
        } else {
            "Good"
        }
    }
}

/// One day of the simulated 7-day outbreak forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPrediction {
    /// Calendar date of the prediction
    pub date: NaiveDate,
    /// Disease label, taken from the civic snapshot's predicted outbreak
    pub disease: String,
    /// Predicted daily case count
    pub cases: u32,
    /// Simulated per-day confidence, percent (70..=95)
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_wire_format() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"moderate\"").unwrap(),
            RiskLevel::Moderate
        );
    }

    #[test]
    fn test_event_density_wire_format() {
        // Capitalized on the wire, matching the original dashboard display
        assert_eq!(
            serde_json::to_string(&EventDensity::Normal).unwrap(),
            "\"Normal\""
        );
    }

    #[test]
    fn test_aqi_label_bands() {
        let mut data = CivicData {
            rainfall_mm: 10.0,
            aqi: 100,
            event_density: EventDensity::Normal,
            predicted_outbreak: "No significant outbreak expected".to_string(),
            risk_level: RiskLevel::Low,
            confidence: 80,
        };
        assert_eq!(data.aqi_label(), "Good");
        data.aqi = 180;
        assert_eq!(data.aqi_label(), "Moderate");
        data.aqi = 250;
        assert_eq!(data.aqi_label(), "Poor");
    }
}
