//! Mock data generator
//!
//! Produces the randomized civic snapshot and the simulated 7-day outbreak
//! forecast. Every call is independent: values are drawn fresh from fixed
//! ranges and prior snapshots are discarded. Risk level and outbreak label
//! come from threshold rules over rainfall and AQI, not from any model.
//!
//! The civic snapshot and the forecast are generated in one pass so the two
//! agree: the forecast's disease label is the snapshot's predicted outbreak
//! and its case-count band scales with the snapshot's risk level.

use chrono::{DateTime, Days, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{CivicData, DayPrediction, EventDensity, RiskLevel};

/// Rainfall range, millimetres over 24 hours
pub const RAINFALL_RANGE: std::ops::RangeInclusive<f64> = 0.0..=150.0;
/// Air quality index range
pub const AQI_RANGE: std::ops::RangeInclusive<u32> = 40..=300;
/// Simulated confidence range, percent
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 70..=95;
/// Days covered by a forecast
pub const FORECAST_DAYS: u64 = 7;

// Threshold rules for deriving the risk tier.
const RAINFALL_HIGH_MM: f64 = 100.0;
const RAINFALL_MODERATE_MM: f64 = 60.0;
const AQI_HIGH: u32 = 200;
const AQI_MODERATE: u32 = 150;

/// A consistent civic-data/forecast pair produced in a single pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub civic: CivicData,
    pub forecast: Vec<DayPrediction>,
    pub generated_at: DateTime<Utc>,
}

/// Generate a fresh civic snapshot
pub fn generate_civic_data(rng: &mut impl Rng) -> CivicData {
    let rainfall_mm = round1(rng.gen_range(RAINFALL_RANGE));
    let aqi = rng.gen_range(AQI_RANGE);
    let event_density = *EventDensity::all()
        .choose(rng)
        .unwrap_or(&EventDensity::Normal);

    let risk_level = derive_risk_level(rainfall_mm, aqi);
    let predicted_outbreak = derive_outbreak_label(rainfall_mm, aqi).to_string();
    let confidence = rng.gen_range(CONFIDENCE_RANGE);

    CivicData {
        rainfall_mm,
        aqi,
        event_density,
        predicted_outbreak,
        risk_level,
        confidence,
    }
}

/// Generate a 7-day forecast derived from the given civic snapshot
///
/// Dates are consecutive starting today (UTC). Case counts are drawn from a
/// band chosen by the snapshot's risk level so the forecast trend agrees with
/// the displayed risk.
pub fn generate_forecast(rng: &mut impl Rng, civic: &CivicData) -> Vec<DayPrediction> {
    let today = Utc::now().date_naive();
    let case_range = case_range(civic.risk_level);

    (0..FORECAST_DAYS)
        .map(|offset| DayPrediction {
            // Days::new never fails to add within a 7-day horizon
            date: today
                .checked_add_days(Days::new(offset))
                .unwrap_or(today),
            disease: civic.predicted_outbreak.clone(),
            cases: rng.gen_range(case_range.clone()),
            confidence: rng.gen_range(CONFIDENCE_RANGE),
        })
        .collect()
}

/// Generate a consistent snapshot: civic data plus the forecast derived from it
///
/// This is the single entry point used on startup, manual refresh, and the
/// periodic timer.
pub fn generate_snapshot(rng: &mut impl Rng) -> Snapshot {
    let civic = generate_civic_data(rng);
    let forecast = generate_forecast(rng, &civic);
    Snapshot {
        civic,
        forecast,
        generated_at: Utc::now(),
    }
}

/// Daily case-count band per risk tier
pub fn case_range(risk: RiskLevel) -> std::ops::RangeInclusive<u32> {
    match risk {
        RiskLevel::Low => 10..=40,
        RiskLevel::Moderate => 40..=120,
        RiskLevel::High => 120..=300,
    }
}

fn derive_risk_level(rainfall_mm: f64, aqi: u32) -> RiskLevel {
    if rainfall_mm > RAINFALL_HIGH_MM || aqi > AQI_HIGH {
        RiskLevel::High
    } else if rainfall_mm > RAINFALL_MODERATE_MM || aqi > AQI_MODERATE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

fn derive_outbreak_label(rainfall_mm: f64, aqi: u32) -> &'static str {
    if rainfall_mm > RAINFALL_HIGH_MM {
        "Dengue / Malaria surge likely"
    } else if aqi > AQI_HIGH {
        "Respiratory illness spike likely"
    } else if rainfall_mm > RAINFALL_MODERATE_MM {
        "Waterborne disease risk elevated"
    } else if aqi > AQI_MODERATE {
        "Asthma and bronchitis uptick possible"
    } else {
        "No significant outbreak expected"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_civic_data_within_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let data = generate_civic_data(&mut rng);
            assert!(RAINFALL_RANGE.contains(&data.rainfall_mm));
            assert!(AQI_RANGE.contains(&data.aqi));
            assert!(CONFIDENCE_RANGE.contains(&data.confidence));
            assert!(!data.predicted_outbreak.is_empty());
        }
    }

    #[test]
    fn test_forecast_has_seven_consecutive_days() {
        let mut rng = rand::thread_rng();
        let snapshot = generate_snapshot(&mut rng);

        assert_eq!(snapshot.forecast.len(), FORECAST_DAYS as usize);
        let today = Utc::now().date_naive();
        for (i, day) in snapshot.forecast.iter().enumerate() {
            let expected = today.checked_add_days(Days::new(i as u64)).unwrap();
            assert_eq!(day.date, expected);
            assert!(CONFIDENCE_RANGE.contains(&day.confidence));
        }
    }

    #[test]
    fn test_forecast_agrees_with_civic_snapshot() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let snapshot = generate_snapshot(&mut rng);
            let band = case_range(snapshot.civic.risk_level);
            for day in &snapshot.forecast {
                assert_eq!(day.disease, snapshot.civic.predicted_outbreak);
                assert!(band.contains(&day.cases));
            }
        }
    }

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(derive_risk_level(120.0, 50), RiskLevel::High);
        assert_eq!(derive_risk_level(10.0, 250), RiskLevel::High);
        assert_eq!(derive_risk_level(80.0, 50), RiskLevel::Moderate);
        assert_eq!(derive_risk_level(10.0, 180), RiskLevel::Moderate);
        assert_eq!(derive_risk_level(10.0, 50), RiskLevel::Low);
    }

    #[test]
    fn test_outbreak_labels() {
        assert_eq!(
            derive_outbreak_label(120.0, 50),
            "Dengue / Malaria surge likely"
        );
        assert_eq!(
            derive_outbreak_label(10.0, 250),
            "Respiratory illness spike likely"
        );
        assert_eq!(
            derive_outbreak_label(10.0, 50),
            "No significant outbreak expected"
        );
    }

    #[test]
    fn test_case_bands_ordered_by_risk() {
        assert!(case_range(RiskLevel::Low).end() <= case_range(RiskLevel::Moderate).end());
        assert!(case_range(RiskLevel::Moderate).end() <= case_range(RiskLevel::High).end());
        assert!(case_range(RiskLevel::Low).start() <= case_range(RiskLevel::Moderate).start());
    }
}
