//! Route entity type - scheduled point-to-point runs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::EntityKind;
use crate::entities::province::Province;

/// A scheduled route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Unique identifier (e.g. "R001")
    pub id: String,

    /// Route name (e.g. "N1 Northbound")
    pub name: String,

    /// Origin city
    pub start_location: String,

    /// Destination city
    pub destination: String,

    /// Distance in km
    pub distance: u32,

    /// Province the route runs in
    pub province: Province,

    /// Assigned driver (weak reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<String>,

    /// Assigned vehicle (weak reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle_id: Option<String>,

    /// Date the run is scheduled for
    pub scheduled_date: NaiveDate,
}

impl Entity for Route {
    const KIND: EntityKind = EntityKind::Route;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> &str {
        if self.assigned_driver_id.is_some() && self.assigned_vehicle_id.is_some() {
            "assigned"
        } else {
            "unassigned"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_status_reflects_assignment() {
        let mut r = Route {
            id: "R002".to_string(),
            name: "Cape Town Central".to_string(),
            start_location: "Paarl".to_string(),
            destination: "Table View".to_string(),
            distance: 55,
            province: Province::WesternCape,
            assigned_driver_id: None,
            assigned_vehicle_id: None,
            scheduled_date: "2024-05-21".parse().unwrap(),
        };
        assert_eq!(Entity::status(&r), "unassigned");

        r.assigned_driver_id = Some("D003".to_string());
        assert_eq!(Entity::status(&r), "unassigned");

        r.assigned_vehicle_id = Some("V002".to_string());
        assert_eq!(Entity::status(&r), "assigned");
    }

    #[test]
    fn test_route_json_field_names() {
        let json = serde_json::json!({
            "id": "R001",
            "name": "N1 Northbound",
            "startLocation": "Johannesburg",
            "destination": "Pretoria",
            "distance": 60,
            "province": "Gauteng",
            "assignedDriverId": "D001",
            "scheduledDate": "2024-05-20"
        });
        let route: Route = serde_json::from_value(json).unwrap();
        assert_eq!(route.start_location, "Johannesburg");
        assert_eq!(route.assigned_driver_id.as_deref(), Some("D001"));
        assert!(route.assigned_vehicle_id.is_none());
    }
}
