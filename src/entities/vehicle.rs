//! Vehicle entity type - fleet assets

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{normalize_token, Entity};
use crate::core::identity::EntityKind;
use crate::entities::province::Province;

/// Vehicle body type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VehicleType {
    #[default]
    Truck,
    Van,
    Car,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Truck => "Truck",
            VehicleType::Van => "Van",
            VehicleType::Car => "Car",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "truck" => Ok(VehicleType::Truck),
            "van" => Ok(VehicleType::Van),
            "car" => Ok(VehicleType::Car),
            _ => Err(format!("Invalid vehicle type: {}. Use Truck, Van, or Car", s)),
        }
    }
}

/// Fuel / drive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FuelType {
    #[default]
    Diesel,
    Petrol,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Petrol => "Petrol",
            FuelType::Electric => "Electric",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "diesel" => Ok(FuelType::Diesel),
            "petrol" => Ok(FuelType::Petrol),
            "electric" => Ok(FuelType::Electric),
            _ => Err(format!(
                "Invalid fuel type: {}. Use Diesel, Petrol, or Electric",
                s
            )),
        }
    }
}

/// Operational status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "ACTIVE",
            VehicleStatus::Maintenance => "MAINTENANCE",
            VehicleStatus::Inactive => "INACTIVE",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "active" => Ok(VehicleStatus::Active),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            "inactive" => Ok(VehicleStatus::Inactive),
            _ => Err(format!(
                "Invalid vehicle status: {}. Use ACTIVE, MAINTENANCE, or INACTIVE",
                s
            )),
        }
    }
}

/// A fleet vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier (e.g. "V001")
    pub id: String,

    /// Body type
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    /// Number plate
    pub registration_number: String,

    /// Province of registration
    pub province: Province,

    /// Fuel / drive type
    pub fuel_type: FuelType,

    /// Odometer reading in km
    pub mileage: u32,

    /// Operational status
    pub status: VehicleStatus,

    /// Date of the last completed service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<NaiveDate>,
}

impl Entity for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.registration_number.clone()
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Vehicle {
    /// Create a new vehicle with default type, fuel and status
    pub fn new(id: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vehicle_type: VehicleType::default(),
            registration_number: registration_number.into(),
            province: Province::default(),
            fuel_type: FuelType::default(),
            mileage: 0,
            status: VehicleStatus::default(),
            last_service_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == VehicleStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_creation_defaults() {
        let v = Vehicle::new("V006", "TEST 1");
        assert_eq!(v.id, "V006");
        assert_eq!(v.vehicle_type, VehicleType::Truck);
        assert_eq!(v.fuel_type, FuelType::Diesel);
        assert_eq!(v.province, Province::Gauteng);
        assert_eq!(v.status, VehicleStatus::Active);
        assert!(v.is_active());
    }

    #[test]
    fn test_vehicle_json_uses_dashboard_field_names() {
        let v = Vehicle::new("V001", "KFT 102 GP");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["registrationNumber"], "KFT 102 GP");
        assert_eq!(json["type"], "Truck");
        assert_eq!(json["fuelType"], "Diesel");
        assert_eq!(json["status"], "ACTIVE");
        assert!(json.get("lastServiceDate").is_none());
    }

    #[test]
    fn test_entity_trait_implementation() {
        let v = Vehicle::new("V001", "KFT 102 GP");
        assert_eq!(Vehicle::KIND, EntityKind::Vehicle);
        assert_eq!(v.id(), "V001");
        assert_eq!(v.title(), "KFT 102 GP");
        assert_eq!(Entity::status(&v), "ACTIVE");
    }

    #[test]
    fn test_vehicle_status_from_str() {
        assert_eq!("active".parse::<VehicleStatus>().unwrap(), VehicleStatus::Active);
        assert_eq!("MAINTENANCE".parse::<VehicleStatus>().unwrap(), VehicleStatus::Maintenance);
        assert!("parked".parse::<VehicleStatus>().is_err());
    }
}
