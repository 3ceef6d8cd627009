//! Telemetry - fuel consumption and spend

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::{Collection, FleetStore};
use crate::entities::FuelEntry;
use crate::views::crud::CrudView;

pub struct FuelView;

impl CrudView for FuelView {
    type Record = FuelEntry;
    type Facet = String;

    fn collection(store: &FleetStore) -> &Collection<FuelEntry> {
        &store.fuel
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<FuelEntry> {
        &mut store.fuel
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::of(
                "vehicle",
                "Vehicle",
                FieldKind::Reference {
                    kind: EntityKind::Vehicle,
                    optional: false,
                },
            ),
            FieldSpec::of("date", "Date", FieldKind::Date),
            FieldSpec::of("liters", "Liters", FieldKind::Decimal),
            FieldSpec::of("cost", "Cost (R)", FieldKind::Decimal),
        ]
    }

    fn defaults(now: NaiveDateTime) -> FormValues {
        FormValues::new().with("date", now.date())
    }

    fn to_form(e: &FuelEntry) -> FormValues {
        FormValues::new()
            .with("vehicle", &e.vehicle_id)
            .with("date", e.date)
            .with("liters", e.liters)
            .with("cost", e.cost)
    }

    fn build(id: String, form: &FormValues) -> Result<FuelEntry, FormError> {
        Ok(FuelEntry {
            id,
            vehicle_id: form.text("vehicle")?,
            date: form.date("date")?,
            liters: form.non_negative("liters")?,
            cost: form.non_negative("cost")?,
        })
    }

    fn search_fields(e: &FuelEntry) -> Vec<&str> {
        vec![e.vehicle_id.as_str()]
    }

    fn facet(e: &FuelEntry) -> String {
        e.vehicle_id.clone()
    }
}

/// Spend attributed to one vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpend {
    pub vehicle_id: String,
    pub registration: String,
    pub cost: f64,
}

/// Headline fuel figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelSummary {
    pub total_liters: f64,
    pub total_cost: f64,
    /// None when no fuel has been drawn
    pub avg_price_per_liter: Option<f64>,
    /// Vehicles in registry order, only those with spend above zero
    pub by_vehicle: Vec<VehicleSpend>,
}

pub fn summary(store: &FleetStore) -> FuelSummary {
    let entries = store.fuel.items();
    let total_liters: f64 = entries.iter().map(|e| e.liters).sum();
    let total_cost: f64 = entries.iter().map(|e| e.cost).sum();

    let by_vehicle = store
        .vehicles
        .items()
        .iter()
        .map(|v| VehicleSpend {
            vehicle_id: v.id.clone(),
            registration: v.registration_number.clone(),
            cost: entries
                .iter()
                .filter(|e| e.vehicle_id == v.id)
                .map(|e| e.cost)
                .sum(),
        })
        .filter(|s| s.cost > 0.0)
        .collect();

    FuelSummary {
        total_liters,
        total_cost,
        avg_price_per_liter: (total_liters > 0.0).then(|| total_cost / total_liters),
        by_vehicle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FormError;
    use crate::core::search::Filter;
    use crate::core::seed;
    use crate::views::crud::{self, CrudError};

    #[test]
    fn test_seed_summary() {
        let store = seed::load_embedded().unwrap();
        let s = summary(&store);
        assert_eq!(s.total_liters, 475.0);
        assert_eq!(s.total_cost, 11400.0);
        assert_eq!(s.avg_price_per_liter, Some(24.0));

        let regs: Vec<_> = s.by_vehicle.iter().map(|v| v.registration.as_str()).collect();
        assert_eq!(regs, vec!["KFT 102 GP", "CAA 88210", "ND 992-001"]);
        assert_eq!(s.by_vehicle[0].cost, 5520.0);
    }

    #[test]
    fn test_empty_summary_has_no_average() {
        let s = summary(&FleetStore::default());
        assert_eq!(s.total_liters, 0.0);
        assert_eq!(s.avg_price_per_liter, None);
        assert!(s.by_vehicle.is_empty());
    }

    #[test]
    fn test_negative_liters_rejected() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("vehicle", "V004")
            .with("liters", "-5")
            .with("cost", "100");
        let err = crud::create::<FuelView>(
            &mut store,
            input,
            "2024-05-20T09:00:00".parse().unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, CrudError::Form(FormError::Negative { .. })));
        assert_eq!(store.fuel.len(), 4);
    }

    #[test]
    fn test_create_defaults_date_to_today() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("vehicle", "V004")
            .with("liters", "40")
            .with("cost", "960");
        let e = crud::create::<FuelView>(
            &mut store,
            input,
            "2024-05-20T09:00:00".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(e.id, "F005");
        assert_eq!(e.date.to_string(), "2024-05-20");
    }

    #[test]
    fn test_filter_by_vehicle() {
        let store = seed::load_embedded().unwrap();
        let v1 = crud::list::<FuelView>(&store, "", &Filter::Only("V001".to_string()));
        assert_eq!(v1.len(), 2);
    }
}
