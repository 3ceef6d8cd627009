//! Driver entity type - licensed operators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{normalize_token, Entity};
use crate::core::identity::EntityKind;

/// Duty status of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    #[default]
    Available,
    OnRoute,
    OffDuty,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "AVAILABLE",
            DriverStatus::OnRoute => "ON_ROUTE",
            DriverStatus::OffDuty => "OFF_DUTY",
        }
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DriverStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "available" => Ok(DriverStatus::Available),
            "on_route" => Ok(DriverStatus::OnRoute),
            "off_duty" => Ok(DriverStatus::OffDuty),
            _ => Err(format!(
                "Invalid driver status: {}. Use AVAILABLE, ON_ROUTE, or OFF_DUTY",
                s
            )),
        }
    }
}

/// A driver on the fleet roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Unique identifier (e.g. "D001")
    pub id: String,

    /// Full name
    pub name: String,

    /// Driving licence number
    pub license_number: String,

    /// Licence expiry date
    pub license_expiry: NaiveDate,

    /// Vehicle currently assigned (weak reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle_id: Option<String>,

    /// Duty status
    pub status: DriverStatus,
}

impl Entity for Driver {
    const KIND: EntityKind = EntityKind::Driver;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Driver {
    /// A licence is expired once its expiry date lies strictly before `today`
    pub fn license_expired(&self, today: NaiveDate) -> bool {
        self.license_expiry < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(expiry: &str) -> Driver {
        Driver {
            id: "D001".to_string(),
            name: "Sipho Zulu".to_string(),
            license_number: "L-882192".to_string(),
            license_expiry: expiry.parse().unwrap(),
            assigned_vehicle_id: Some("V001".to_string()),
            status: DriverStatus::OnRoute,
        }
    }

    #[test]
    fn test_license_expired() {
        let today: NaiveDate = "2024-06-01".parse().unwrap();
        assert!(driver("2023-11-01").license_expired(today));
        assert!(!driver("2024-06-01").license_expired(today));
        assert!(!driver("2025-12-31").license_expired(today));
    }

    #[test]
    fn test_driver_status_from_str() {
        assert_eq!("on route".parse::<DriverStatus>().unwrap(), DriverStatus::OnRoute);
        assert_eq!("OFF_DUTY".parse::<DriverStatus>().unwrap(), DriverStatus::OffDuty);
        assert!("asleep".parse::<DriverStatus>().is_err());
    }

    #[test]
    fn test_driver_yaml_roundtrip() {
        let d = driver("2025-12-31");
        let yaml = serde_yml::to_string(&d).unwrap();
        assert!(yaml.contains("licenseNumber: L-882192"));
        assert!(yaml.contains("ON_ROUTE"));
        let parsed: Driver = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, d);
    }
}
