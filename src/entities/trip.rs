//! Trip entity type - dispatched journeys with a completion lifecycle

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::entity::{normalize_token, Entity};
use crate::core::identity::EntityKind;

/// Trip lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Pending => "PENDING",
            TripStatus::InProgress => "IN_PROGRESS",
            TripStatus::Completed => "COMPLETED",
        }
    }

    pub fn all() -> &'static [TripStatus] {
        &[TripStatus::Pending, TripStatus::InProgress, TripStatus::Completed]
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "pending" => Ok(TripStatus::Pending),
            "in_progress" => Ok(TripStatus::InProgress),
            "completed" => Ok(TripStatus::Completed),
            _ => Err(format!(
                "Invalid trip status: {}. Use PENDING, IN_PROGRESS, or COMPLETED",
                s
            )),
        }
    }
}

/// A trip from origin to destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,

    /// Vehicle used (weak reference)
    pub vehicle_id: String,

    /// Driver assigned (weak reference)
    pub driver_id: String,

    pub origin: String,

    pub destination: String,

    pub start_time: NaiveDateTime,

    /// Set when, and only when, the trip is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,

    /// Revenue earned in rand
    pub revenue: f64,

    pub status: TripStatus,
}

impl Entity for Trip {
    const KIND: EntityKind = EntityKind::Trip;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Trip {
    /// Completed trips expose no completion control
    pub fn can_complete(&self) -> bool {
        self.status != TripStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_from_yaml() {
        let yaml = "id: T-002\nvehicleId: V002\ndriverId: D002\norigin: Cape Town\ndestination: Stellenbosch\nstartTime: 2024-05-19T10:00:00\nendTime: 2024-05-19T14:30:00\nrevenue: 2850\nstatus: COMPLETED\n";
        let trip: Trip = serde_yml::from_str(yaml).unwrap();
        assert_eq!(trip.status, TripStatus::Completed);
        assert!(trip.end_time.is_some());
        assert!(!trip.can_complete());
        assert_eq!(trip.title(), "Cape Town → Stellenbosch");
    }

    #[test]
    fn test_trip_status_from_str() {
        assert_eq!("in progress".parse::<TripStatus>().unwrap(), TripStatus::InProgress);
        assert!("cancelled".parse::<TripStatus>().is_err());
    }
}
