//! Maintenance log entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::EntityKind;

/// A completed service on a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: String,

    /// Serviced vehicle (weak reference)
    pub vehicle_id: String,

    /// Kind of service (e.g. "Major Service", "Tyre Replacement")
    #[serde(rename = "type")]
    pub service_type: String,

    pub date: NaiveDate,

    pub cost: f64,

    pub next_service_date: NaiveDate,

    #[serde(default)]
    pub notes: String,
}

impl Entity for MaintenanceLog {
    const KIND: EntityKind = EntityKind::Maintenance;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.service_type.clone()
    }

    fn status(&self) -> &str {
        "logged"
    }
}

impl MaintenanceLog {
    /// Whether the next service is due on or before `today`
    pub fn service_due(&self, today: NaiveDate) -> bool {
        self.next_service_date <= today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_due() {
        let log = MaintenanceLog {
            id: "M001".to_string(),
            vehicle_id: "V003".to_string(),
            service_type: "Major Service".to_string(),
            date: "2024-05-15".parse().unwrap(),
            cost: 8500.0,
            next_service_date: "2024-11-15".parse().unwrap(),
            notes: "Standard 100k km check-up.".to_string(),
        };
        assert!(!log.service_due("2024-06-01".parse().unwrap()));
        assert!(log.service_due("2024-11-15".parse().unwrap()));
    }

    #[test]
    fn test_type_field_is_renamed() {
        let yaml = "id: M009\nvehicleId: V001\ntype: Brakes\ndate: 2024-01-01\ncost: 10\nnextServiceDate: 2024-07-01\n";
        let log: MaintenanceLog = serde_yml::from_str(yaml).unwrap();
        assert_eq!(log.service_type, "Brakes");
        assert!(log.notes.is_empty());
    }
}
