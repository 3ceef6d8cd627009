//! Operator Deck - the driver roster

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::{Collection, FleetStore};
use crate::entities::{Driver, DriverStatus};
use crate::views::crud::CrudView;

/// Shown when a driver's vehicle reference does not resolve
pub const NO_VEHICLE: &str = "No Vehicle";

pub struct DriversView;

impl CrudView for DriversView {
    type Record = Driver;
    type Facet = DriverStatus;

    fn collection(store: &FleetStore) -> &Collection<Driver> {
        &store.drivers
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<Driver> {
        &mut store.drivers
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Full name"),
            FieldSpec::text("license_number", "Licence number"),
            FieldSpec::of("license_expiry", "Licence expiry", FieldKind::Date),
            FieldSpec::of(
                "vehicle",
                "Assigned vehicle",
                FieldKind::Reference {
                    kind: EntityKind::Vehicle,
                    optional: true,
                },
            )
            .optional(),
            FieldSpec::of(
                "status",
                "Status",
                FieldKind::Choice(vec!["AVAILABLE", "ON_ROUTE", "OFF_DUTY"]),
            ),
        ]
    }

    fn defaults(_now: NaiveDateTime) -> FormValues {
        FormValues::new().with("status", "AVAILABLE")
    }

    fn to_form(d: &Driver) -> FormValues {
        let mut form = FormValues::new()
            .with("name", &d.name)
            .with("license_number", &d.license_number)
            .with("license_expiry", d.license_expiry)
            .with("status", d.status);
        form.set_opt("vehicle", d.assigned_vehicle_id.as_ref());
        form
    }

    fn build(id: String, form: &FormValues) -> Result<Driver, FormError> {
        Ok(Driver {
            id,
            name: form.text("name")?,
            license_number: form.text("license_number")?,
            license_expiry: form.date("license_expiry")?,
            assigned_vehicle_id: form.opt_text("vehicle"),
            status: form.choice("status")?,
        })
    }

    fn search_fields(d: &Driver) -> Vec<&str> {
        vec![d.name.as_str(), d.license_number.as_str()]
    }

    fn facet(d: &Driver) -> DriverStatus {
        d.status
    }
}

/// A roster line with its references resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRow<'a> {
    #[serde(flatten)]
    pub driver: &'a Driver,
    pub license_expired: bool,
    /// Registration of the assigned vehicle, or [`NO_VEHICLE`]
    pub vehicle: String,
}

/// Resolve each driver's vehicle and licence state as of `today`
pub fn roster<'a>(store: &FleetStore, drivers: &[&'a Driver], today: NaiveDate) -> Vec<DriverRow<'a>> {
    drivers
        .iter()
        .map(|&d| DriverRow {
            driver: d,
            license_expired: d.license_expired(today),
            vehicle: d
                .assigned_vehicle_id
                .as_deref()
                .and_then(|id| store.vehicle_registration(id))
                .unwrap_or(NO_VEHICLE)
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::Filter;
    use crate::core::seed;
    use crate::views::crud;

    fn now() -> NaiveDateTime {
        "2024-05-20T09:00:00".parse().unwrap()
    }

    #[test]
    fn test_create_driver_defaults_to_available_without_vehicle() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("name", "Lerato Dlamini")
            .with("license_number", "L-555001")
            .with("license_expiry", "2027-01-31");
        let d = crud::create::<DriversView>(&mut store, input, now()).unwrap();
        assert_eq!(d.id, "D005");
        assert_eq!(d.status, DriverStatus::Available);
        assert!(d.assigned_vehicle_id.is_none());
    }

    #[test]
    fn test_edit_can_unassign_vehicle() {
        let mut store = seed::load_embedded().unwrap();
        let d = crud::edit::<DriversView>(
            &mut store,
            "D001",
            FormValues::new().with("vehicle", "none"),
        )
        .unwrap();
        assert!(d.assigned_vehicle_id.is_none());
        assert_eq!(d.name, "Sipho Zulu");
    }

    #[test]
    fn test_roster_flags_and_placeholders() {
        let mut store = seed::load_embedded().unwrap();
        store.vehicles.remove("V002").unwrap();

        let drivers = crud::list::<DriversView>(&store, "", &Filter::All);
        let today: NaiveDate = "2024-05-20".parse().unwrap();
        let rows = roster(&store, &drivers, today);

        assert_eq!(rows[0].vehicle, "KFT 102 GP");
        assert_eq!(rows[1].vehicle, NO_VEHICLE);
        assert_eq!(rows[2].vehicle, NO_VEHICLE);
        assert!(!rows[0].license_expired);
        assert!(rows[3].license_expired);
    }

    #[test]
    fn test_search_by_license() {
        let store = seed::load_embedded().unwrap();
        let hits = crud::list::<DriversView>(&store, "l-33", &Filter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "D003");
    }
}
