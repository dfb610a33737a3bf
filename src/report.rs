//! Forecast report export
//!
//! Builds the downloadable JSON artifact from the current snapshot. The
//! report is generated entirely in memory and served as an attachment; the
//! camelCase field names match the file format the original dashboard
//! produced, so previously downloaded reports stay comparable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generator::Snapshot;
use crate::model::{CivicData, DayPrediction};

/// The exported forecast report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub generated_at: DateTime<Utc>,
    pub civic_data: CivicData,
    pub predictions: Vec<DayPrediction>,
    pub confidence: u8,
}

impl ForecastReport {
    /// Build a report from the snapshot current at export time
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            generated_at: snapshot.generated_at,
            civic_data: snapshot.civic.clone(),
            predictions: snapshot.forecast.clone(),
            confidence: snapshot.civic.confidence,
        }
    }

    /// Pretty-printed JSON body of the artifact
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Download filename, e.g. `m-pulse-forecast-1735689600000.json`
    pub fn filename(&self) -> String {
        format!("m-pulse-forecast-{}.json", self.generated_at.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_snapshot;

    #[test]
    fn test_report_round_trips_exact_snapshot() {
        let mut rng = rand::thread_rng();
        let snapshot = generate_snapshot(&mut rng);

        let report = ForecastReport::from_snapshot(&snapshot);
        let json = report.to_json_pretty().unwrap();
        let parsed: ForecastReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report);
        assert_eq!(parsed.civic_data, snapshot.civic);
        assert_eq!(parsed.predictions, snapshot.forecast);
        assert_eq!(parsed.confidence, snapshot.civic.confidence);
    }

    #[test]
    fn test_report_uses_camel_case_keys() {
        let mut rng = rand::thread_rng();
        let report = ForecastReport::from_snapshot(&generate_snapshot(&mut rng));
        let json = report.to_json_pretty().unwrap();

        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"civicData\""));
        assert!(json.contains("\"predictions\""));
    }

    #[test]
    fn test_filename_shape() {
        let mut rng = rand::thread_rng();
        let report = ForecastReport::from_snapshot(&generate_snapshot(&mut rng));
        let name = report.filename();
        assert!(name.starts_with("m-pulse-forecast-"));
        assert!(name.ends_with(".json"));
    }
}
