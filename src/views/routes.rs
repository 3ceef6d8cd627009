//! Route Matrix - scheduled runs and their assignments

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::{Collection, FleetStore};
use crate::entities::{Province, Route};
use crate::views::crud::CrudView;

/// Shown when a route's driver or vehicle does not resolve
pub const UNASSIGNED: &str = "Unassigned";

pub struct RoutesView;

impl CrudView for RoutesView {
    type Record = Route;
    type Facet = Province;

    fn collection(store: &FleetStore) -> &Collection<Route> {
        &store.routes
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<Route> {
        &mut store.routes
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Route name"),
            FieldSpec::text("from", "Start location"),
            FieldSpec::text("to", "Destination"),
            FieldSpec::of("distance", "Distance (km)", FieldKind::Integer),
            FieldSpec::of(
                "province",
                "Province",
                FieldKind::Choice(Province::all().iter().map(|p| p.as_str()).collect()),
            ),
            FieldSpec::of(
                "driver",
                "Driver",
                FieldKind::Reference {
                    kind: EntityKind::Driver,
                    optional: true,
                },
            )
            .optional(),
            FieldSpec::of(
                "vehicle",
                "Vehicle",
                FieldKind::Reference {
                    kind: EntityKind::Vehicle,
                    optional: true,
                },
            )
            .optional(),
            FieldSpec::of("scheduled", "Scheduled date", FieldKind::Date),
        ]
    }

    fn defaults(_now: NaiveDateTime) -> FormValues {
        FormValues::new().with("province", "Gauteng")
    }

    fn to_form(r: &Route) -> FormValues {
        let mut form = FormValues::new()
            .with("name", &r.name)
            .with("from", &r.start_location)
            .with("to", &r.destination)
            .with("distance", r.distance)
            .with("province", r.province)
            .with("scheduled", r.scheduled_date);
        form.set_opt("driver", r.assigned_driver_id.as_ref());
        form.set_opt("vehicle", r.assigned_vehicle_id.as_ref());
        form
    }

    fn build(id: String, form: &FormValues) -> Result<Route, FormError> {
        Ok(Route {
            id,
            name: form.text("name")?,
            start_location: form.text("from")?,
            destination: form.text("to")?,
            distance: form.integer("distance")?,
            province: form.choice("province")?,
            assigned_driver_id: form.opt_text("driver"),
            assigned_vehicle_id: form.opt_text("vehicle"),
            scheduled_date: form.date("scheduled")?,
        })
    }

    fn search_fields(r: &Route) -> Vec<&str> {
        vec![
            r.name.as_str(),
            r.start_location.as_str(),
            r.destination.as_str(),
        ]
    }

    fn facet(r: &Route) -> Province {
        r.province
    }
}

/// A route with its assignments resolved for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRow<'a> {
    #[serde(flatten)]
    pub route: &'a Route,
    pub driver: String,
    pub vehicle: String,
}

pub fn assignments<'a>(store: &FleetStore, routes: &[&'a Route]) -> Vec<RouteRow<'a>> {
    routes
        .iter()
        .map(|&r| RouteRow {
            route: r,
            driver: r
                .assigned_driver_id
                .as_deref()
                .and_then(|id| store.driver_name(id))
                .unwrap_or(UNASSIGNED)
                .to_string(),
            vehicle: r
                .assigned_vehicle_id
                .as_deref()
                .and_then(|id| store.vehicle_registration(id))
                .unwrap_or(UNASSIGNED)
                .to_string(),
        })
        .collect()
}
