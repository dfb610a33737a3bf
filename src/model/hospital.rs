//! Hospital fixtures
//!
//! Fixed seed data for the hospital command view. Entries are fictional
//! snapshots of real Mumbai municipal hospitals; nothing in the service
//! mutates them. The auto-allocate and resource-request operations only
//! return canned acknowledgements.

use serde::{Deserialize, Serialize};

/// Three-tier alert severity, shared by hospitals and advisories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Low,
    Moderate,
    High,
}

impl AlertLevel {
    /// Marker color used on the map view
    pub fn marker_color(&self) -> &'static str {
        match self {
            AlertLevel::Low => "#10b981",
            AlertLevel::Moderate => "#f59e0b",
            AlertLevel::High => "#ef4444",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Low => write!(f, "low"),
            AlertLevel::Moderate => write!(f, "moderate"),
            AlertLevel::High => write!(f, "high"),
        }
    }
}

/// A hospital in the command network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    /// Stable identifier used in route paths
    pub id: String,
    pub name: String,
    /// Administrative ward the hospital serves
    pub ward: String,
    pub total_beds: u32,
    /// Always <= total_beds
    pub beds_available: u32,
    pub doctors_on_duty: u32,
    pub alert_level: AlertLevel,
    /// Longitude, latitude
    pub coordinates: [f64; 2],
}

impl Hospital {
    /// Occupancy as a percentage of total beds, rounded
    pub fn occupancy_rate(&self) -> u32 {
        if self.total_beds == 0 {
            return 0;
        }
        let occupied = self.total_beds - self.beds_available;
        ((occupied as f64 / self.total_beds as f64) * 100.0).round() as u32
    }
}

/// Aggregate view across the whole hospital network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleetSummary {
    pub total_beds: u32,
    pub beds_available: u32,
    pub doctors_on_duty: u32,
    /// Number of hospitals at high alert
    pub high_alert_count: u32,
}

/// Compute the network-wide summary shown at the top of the command view
pub fn fleet_summary(hospitals: &[Hospital]) -> FleetSummary {
    FleetSummary {
        total_beds: hospitals.iter().map(|h| h.total_beds).sum(),
        beds_available: hospitals.iter().map(|h| h.beds_available).sum(),
        doctors_on_duty: hospitals.iter().map(|h| h.doctors_on_duty).sum(),
        high_alert_count: hospitals
            .iter()
            .filter(|h| h.alert_level == AlertLevel::High)
            .count() as u32,
    }
}

/// The fixed hospital network
pub fn hospitals() -> Vec<Hospital> {
    fn h(
        id: &str,
        name: &str,
        ward: &str,
        total_beds: u32,
        beds_available: u32,
        doctors_on_duty: u32,
        alert_level: AlertLevel,
        coordinates: [f64; 2],
    ) -> Hospital {
        Hospital {
            id: id.to_string(),
            name: name.to_string(),
            ward: ward.to_string(),
            total_beds,
            beds_available,
            doctors_on_duty,
            alert_level,
            coordinates,
        }
    }

    vec![
        h(
            "kem",
            "KEM Hospital",
            "Parel",
            1800,
            230,
            410,
            AlertLevel::Moderate,
            [72.8424, 19.0027],
        ),
        h(
            "sion",
            "Sion Hospital",
            "Sion",
            1400,
            85,
            290,
            AlertLevel::High,
            [72.8603, 19.0390],
        ),
        h(
            "cooper",
            "Cooper Hospital",
            "Vile Parle West",
            600,
            170,
            140,
            AlertLevel::Low,
            [72.8342, 19.1076],
        ),
        h(
            "nair",
            "Nair Hospital",
            "Mumbai Central",
            1200,
            140,
            310,
            AlertLevel::Moderate,
            [72.8202, 18.9750],
        ),
        h(
            "jj",
            "JJ Hospital",
            "Byculla",
            1350,
            95,
            350,
            AlertLevel::High,
            [72.8347, 18.9633],
        ),
        h(
            "rajawadi",
            "Rajawadi Hospital",
            "Ghatkopar East",
            580,
            210,
            120,
            AlertLevel::Low,
            [72.9106, 19.0790],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beds_available_never_exceeds_total() {
        for hospital in hospitals() {
            assert!(
                hospital.beds_available <= hospital.total_beds,
                "{} has more beds available than total",
                hospital.name
            );
        }
    }

    #[test]
    fn test_hospital_ids_unique() {
        let list = hospitals();
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_occupancy_rate() {
        let hospital = Hospital {
            id: "test".to_string(),
            name: "Test Hospital".to_string(),
            ward: "Test Ward".to_string(),
            total_beds: 100,
            beds_available: 25,
            doctors_on_duty: 10,
            alert_level: AlertLevel::Low,
            coordinates: [72.0, 19.0],
        };
        assert_eq!(hospital.occupancy_rate(), 75);
    }

    #[test]
    fn test_fleet_summary_totals() {
        let list = hospitals();
        let summary = fleet_summary(&list);

        assert_eq!(
            summary.total_beds,
            list.iter().map(|h| h.total_beds).sum::<u32>()
        );
        assert!(summary.beds_available <= summary.total_beds);
        assert_eq!(summary.high_alert_count, 2);
    }

    #[test]
    fn test_coordinates_in_mumbai_bounds() {
        for hospital in hospitals() {
            let [lng, lat] = hospital.coordinates;
            assert!((72.7..=73.1).contains(&lng), "{} longitude", hospital.name);
            assert!((18.8..=19.3).contains(&lat), "{} latitude", hospital.name);
        }
    }
}
