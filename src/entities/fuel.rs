//! Fuel entry entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::EntityKind;

/// A refuelling record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEntry {
    pub id: String,

    /// Refuelled vehicle (weak reference)
    pub vehicle_id: String,

    pub date: NaiveDate,

    /// Volume in liters, never negative
    pub liters: f64,

    /// Cost in rand, never negative
    pub cost: f64,
}

impl Entity for FuelEntry {
    const KIND: EntityKind = EntityKind::Fuel;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {:.0} L", self.vehicle_id, self.liters)
    }

    fn status(&self) -> &str {
        "logged"
    }
}

impl FuelEntry {
    /// Price per liter, if any fuel was drawn
    pub fn price_per_liter(&self) -> Option<f64> {
        (self.liters > 0.0).then(|| self.cost / self.liters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_per_liter() {
        let entry = FuelEntry {
            id: "F001".to_string(),
            vehicle_id: "V001".to_string(),
            date: "2024-05-01".parse().unwrap(),
            liters: 120.0,
            cost: 2880.0,
        };
        assert_eq!(entry.price_per_liter(), Some(24.0));

        let empty = FuelEntry { liters: 0.0, ..entry };
        assert_eq!(empty.price_per_liter(), None);
    }
}
