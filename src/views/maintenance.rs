//! Maintenance - service history and vehicles in the shop

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::{Collection, FleetStore};
use crate::entities::{MaintenanceLog, Vehicle, VehicleStatus};
use crate::views::crud::CrudView;

pub struct MaintenanceView;

impl CrudView for MaintenanceView {
    type Record = MaintenanceLog;
    type Facet = String;

    fn collection(store: &FleetStore) -> &Collection<MaintenanceLog> {
        &store.maintenance
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<MaintenanceLog> {
        &mut store.maintenance
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
            FieldSpec::text("type", "Service type"),
            FieldSpec::of("date", "Service date", FieldKind::Date),
            FieldSpec::of("cost", "Cost (R)", FieldKind::Decimal),
            FieldSpec::of("next_service", "Next service date", FieldKind::Date),
            FieldSpec::text("notes", "Notes").optional(),
        ]
    }

    fn defaults(now: NaiveDateTime) -> FormValues {
        FormValues::new().with("date", now.date())
    }

    fn to_form(m: &MaintenanceLog) -> FormValues {
        FormValues::new()
            .with("vehicle", &m.vehicle_id)
            .with("type", &m.service_type)
            .with("date", m.date)
            .with("cost", m.cost)
            .with("next_service", m.next_service_date)
            .with("notes", &m.notes)
    }

    fn build(id: String, form: &FormValues) -> Result<MaintenanceLog, FormError> {
        Ok(MaintenanceLog {
            id,
            vehicle_id: form.text("vehicle")?,
            service_type: form.text("type")?,
            date: form.date("date")?,
            cost: form.non_negative("cost")?,
            next_service_date: form.date("next_service")?,
            notes: form.get("notes").unwrap_or_default().to_string(),
        })
    }

    fn search_fields(m: &MaintenanceLog) -> Vec<&str> {
        vec![m.service_type.as_str(), m.notes.as_str()]
    }

    fn facet(m: &MaintenanceLog) -> String {
        m.vehicle_id.clone()
    }
}

/// One service on the timeline, with its vehicle resolved when possible
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry<'a> {
    #[serde(flatten)]
    pub log: &'a MaintenanceLog,
    pub registration: Option<&'a str>,
}

pub fn timeline<'a>(store: &'a FleetStore, logs: &[&'a MaintenanceLog]) -> Vec<TimelineEntry<'a>> {
    logs.iter()
        .map(|&log| TimelineEntry {
            log,
            registration: store.vehicle_registration(&log.vehicle_id),
        })
        .collect()
}

/// Vehicles currently flagged MAINTENANCE
pub fn in_shop(store: &FleetStore) -> Vec<&Vehicle> {
    store
        .vehicles
        .items()
        .iter()
        .filter(|v| v.status == VehicleStatus::Maintenance)
        .collect()
}

pub fn total_spend(store: &FleetStore) -> f64 {
    store.maintenance.items().iter().map(|m| m.cost).sum()
}
