//! Asset Matrix - the vehicle registry

use chrono::NaiveDateTime;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::store::{Collection, FleetStore};
use crate::entities::{Vehicle, VehicleStatus};
use crate::views::crud::{CrudView, Deletable};

pub struct VehiclesView;

impl CrudView for VehiclesView {
    type Record = Vehicle;
    type Facet = VehicleStatus;

    fn collection(store: &FleetStore) -> &Collection<Vehicle> {
        &store.vehicles
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<Vehicle> {
        &mut store.vehicles
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("registration", "Registration number"),
            FieldSpec::of("type", "Type", FieldKind::Choice(vec!["Truck", "Van", "Car"])),
            FieldSpec::of(
                "province",
                "Province",
                FieldKind::Choice(
                    crate::entities::Province::all()
                        .iter()
                        .map(|p| p.as_str())
                        .collect(),
                ),
            ),
            FieldSpec::of(
                "fuel_type",
                "Fuel type",
                FieldKind::Choice(vec!["Diesel", "Petrol", "Electric"]),
            ),
            FieldSpec::of("mileage", "Mileage (km)", FieldKind::Integer),
            FieldSpec::of(
                "status",
                "Status",
                FieldKind::Choice(vec!["ACTIVE", "MAINTENANCE", "INACTIVE"]),
            ),
            FieldSpec::of("last_service", "Last service date", FieldKind::Date).optional(),
        ]
    }

    fn defaults(_now: NaiveDateTime) -> FormValues {
        FormValues::new()
            .with("type", "Truck")
            .with("province", "Gauteng")
            .with("fuel_type", "Diesel")
            .with("status", "ACTIVE")
    }

    fn to_form(v: &Vehicle) -> FormValues {
        let mut form = FormValues::new()
            .with("registration", &v.registration_number)
            .with("type", v.vehicle_type)
            .with("province", v.province)
            .with("fuel_type", v.fuel_type)
            .with("mileage", v.mileage)
            .with("status", v.status);
        form.set_opt("last_service", v.last_service_date);
        form
    }

    fn build(id: String, form: &FormValues) -> Result<Vehicle, FormError> {
        Ok(Vehicle {
            id,
            vehicle_type: form.choice("type")?,
            registration_number: form.text("registration")?,
            province: form.choice("province")?,
            fuel_type: form.choice("fuel_type")?,
            mileage: form.integer("mileage")?,
            status: form.choice("status")?,
            last_service_date: form.opt_date("last_service")?,
        })
    }

    fn search_fields(v: &Vehicle) -> Vec<&str> {
        vec![v.registration_number.as_str(), v.id.as_str()]
    }

    fn facet(v: &Vehicle) -> VehicleStatus {
        v.status
    }
}

impl Deletable for VehiclesView {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::Filter;
    use crate::core::seed;
    use crate::views::crud::{self, CrudError};

    fn now() -> NaiveDateTime {
        "2024-05-20T09:00:00".parse().unwrap()
    }

    #[test]
    fn test_create_appends_with_defaults() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("registration", "TEST 1")
            .with("mileage", "0");
        let created = crud::create::<VehiclesView>(&mut store, input, now()).unwrap();

        assert_eq!(created.id, "V006");
        assert_eq!(store.vehicles.len(), 6);
        let last = store.vehicles.items().last().unwrap();
        assert_eq!(last.registration_number, "TEST 1");
        assert_eq!(last.status, VehicleStatus::Active);
        assert_eq!(last, &created);
    }

    #[test]
    fn test_create_requires_registration_and_mileage() {
        let mut store = seed::load_embedded().unwrap();
        let err = crud::create::<VehiclesView>(
            &mut store,
            FormValues::new().with("mileage", "10"),
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, CrudError::Form(FormError::Missing { .. })));

        let err = crud::create::<VehiclesView>(
            &mut store,
            FormValues::new().with("registration", "X"),
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, CrudError::Form(FormError::Missing { .. })));
        assert_eq!(store.vehicles.len(), 5);
    }

    #[test]
    fn test_edit_replaces_exactly_one() {
        let mut store = seed::load_embedded().unwrap();
        let before: Vec<Vehicle> = store.vehicles.items().to_vec();

        let edited = crud::edit::<VehiclesView>(
            &mut store,
            "V003",
            FormValues::new().with("status", "ACTIVE"),
        )
        .unwrap();
        assert_eq!(edited.status, VehicleStatus::Active);
        assert_eq!(edited.mileage, 89000);

        let after = store.vehicles.items();
        assert_eq!(after.len(), before.len());
        let changed: Vec<_> = before
            .iter()
            .zip(after.iter())
            .filter(|(b, a)| b != a)
            .map(|(b, _)| b.id.as_str())
            .collect();
        assert_eq!(changed, vec!["V003"]);
    }

    #[test]
    fn test_edit_unknown_vehicle() {
        let mut store = seed::load_embedded().unwrap();
        let err = crud::edit::<VehiclesView>(&mut store, "V404", FormValues::new()).unwrap_err();
        assert!(matches!(err, CrudError::Store(_)));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut store = seed::load_embedded().unwrap();
        let declined = crud::delete::<VehiclesView>(&mut store, "V002", |_| false).unwrap();
        assert!(declined.is_none());
        assert_eq!(store.vehicles.len(), 5);

        let removed = crud::delete::<VehiclesView>(&mut store, "V002", |_| true).unwrap();
        assert_eq!(removed.unwrap().id, "V002");
        assert!(store.vehicles.find("V002").is_none());
        assert_eq!(store.vehicles.len(), 4);
    }

    #[test]
    fn test_search_and_filter() {
        let store = seed::load_embedded().unwrap();
        let gp = crud::list::<VehiclesView>(&store, "gp", &Filter::All);
        assert_eq!(gp.len(), 2);

        let by_id = crud::list::<VehiclesView>(&store, "v00", &Filter::All);
        assert_eq!(by_id.len(), 5);

        let active = crud::list::<VehiclesView>(&store, "", &Filter::Only(VehicleStatus::Active));
        assert_eq!(active.len(), 3);

        let none = crud::list::<VehiclesView>(&store, "gp", &Filter::Only(VehicleStatus::Inactive));
        assert!(none.is_empty());
    }
}
