//! Journey Log - trip dispatch and completion

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::form::{format_datetime, FieldKind, FieldSpec, FormError, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::{Collection, FleetStore, StoreError};
use crate::entities::{Trip, TripStatus};
use crate::views::crud::CrudView;

/// Result of asking a record to move to another state
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T> {
    /// The record moved; carries the updated record
    Applied(T),
    /// No control exists in the current state, nothing changed
    NoOp(T),
}

impl<T> Transition<T> {
    pub fn applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    pub fn record(&self) -> &T {
        match self {
            Transition::Applied(r) | Transition::NoOp(r) => r,
        }
    }
}

pub struct TripsView;

impl CrudView for TripsView {
    type Record = Trip;
    type Facet = TripStatus;

    fn collection(store: &FleetStore) -> &Collection<Trip> {
        &store.trips
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<Trip> {
        &mut store.trips
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
            FieldSpec::of(
                "driver",
                "Driver",
                FieldKind::Reference {
                    kind: EntityKind::Driver,
                    optional: false,
                },
            ),
            FieldSpec::text("origin", "Origin"),
            FieldSpec::text("destination", "Destination"),
            FieldSpec::of("revenue", "Revenue (R)", FieldKind::Decimal),
        ]
    }

    fn defaults(now: NaiveDateTime) -> FormValues {
        FormValues::new()
            .with("start", format_datetime(&now))
            .with("status", TripStatus::Pending)
    }

    fn to_form(t: &Trip) -> FormValues {
        let mut form = FormValues::new()
            .with("vehicle", &t.vehicle_id)
            .with("driver", &t.driver_id)
            .with("origin", &t.origin)
            .with("destination", &t.destination)
            .with("start", format_datetime(&t.start_time))
            .with("revenue", t.revenue)
            .with("status", t.status);
        form.set_opt("end", t.end_time.as_ref().map(format_datetime));
        form
    }

    fn build(id: String, form: &FormValues) -> Result<Trip, FormError> {
        let status: TripStatus = form.choice("status")?;
        // endTime only ever accompanies a completed trip
        let end_time = match status {
            TripStatus::Completed => match form.get("end") {
                Some(_) => Some(form.datetime("end")?),
                None => None,
            },
            _ => None,
        };
        Ok(Trip {
            id,
            vehicle_id: form.text("vehicle")?,
            driver_id: form.text("driver")?,
            origin: form.text("origin")?,
            destination: form.text("destination")?,
            start_time: form.datetime("start")?,
            end_time,
            revenue: form.non_negative("revenue")?,
            status,
        })
    }

    fn search_fields(t: &Trip) -> Vec<&str> {
        vec![t.origin.as_str(), t.destination.as_str()]
    }

    fn facet(t: &Trip) -> TripStatus {
        t.status
    }

    // completion goes through complete_trip
    const MANAGED: &'static [&'static str] = &["status", "end"];
}

/// Mark trip `id` COMPLETED, stamping `endTime` with `now`.
///
/// Completing a completed trip is a no-op.
pub fn complete_trip(
    store: &mut FleetStore,
    id: &str,
    now: NaiveDateTime,
) -> Result<Transition<Trip>, StoreError> {
    let trip = store.trips.get(id)?;
    if !trip.can_complete() {
        return Ok(Transition::NoOp(trip.clone()));
    }
    let completed = Trip {
        status: TripStatus::Completed,
        end_time: Some(now),
        ..trip.clone()
    };
    store.trips.replace(completed.clone())?;
    tracing::info!(id, "trip completed");
    Ok(Transition::Applied(completed))
}

/// Headline trip figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub total_revenue: f64,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn summary(store: &FleetStore) -> TripSummary {
    let trips = store.trips.items();
    let count = |s: TripStatus| trips.iter().filter(|t| t.status == s).count();
    TripSummary {
        total_revenue: trips.iter().map(|t| t.revenue).sum(),
        pending: count(TripStatus::Pending),
        in_progress: count(TripStatus::InProgress),
        completed: count(TripStatus::Completed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::Filter;
    use crate::core::seed;
    use crate::views::crud;

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_trip_is_pending_and_starts_now() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("vehicle", "V004")
            .with("driver", "D003")
            .with("origin", "Pretoria")
            .with("destination", "Polokwane")
            .with("revenue", "6400");
        let t = crud::create::<TripsView>(&mut store, input, at("2024-05-20T09:15:00")).unwrap();
        assert_eq!(t.id, "T-003");
        assert_eq!(t.status, TripStatus::Pending);
        assert_eq!(t.start_time, at("2024-05-20T09:15:00"));
        assert!(t.end_time.is_none());
    }

    #[test]
    fn test_complete_stamps_end_time() {
        let mut store = seed::load_embedded().unwrap();
        let now = at("2024-05-20T17:45:00");
        let result = complete_trip(&mut store, "T-001", now).unwrap();
        assert!(result.applied());

        let t = store.trips.find("T-001").unwrap();
        assert_eq!(t.status, TripStatus::Completed);
        assert_eq!(t.end_time, Some(now));
    }

    #[test]
    fn test_completing_completed_trip_is_noop() {
        let mut store = seed::load_embedded().unwrap();
        let before = store.trips.find("T-002").unwrap().clone();
        let revision = store.trips.revision();

        let result = complete_trip(&mut store, "T-002", at("2024-06-01T00:00:00")).unwrap();
        assert!(!result.applied());
        assert_eq!(store.trips.find("T-002").unwrap(), &before);
        assert_eq!(store.trips.revision(), revision);
    }

    #[test]
    fn test_complete_unknown_trip() {
        let mut store = seed::load_embedded().unwrap();
        assert!(complete_trip(&mut store, "T-404", at("2024-06-01T00:00:00")).is_err());
    }

    #[test]
    fn test_edit_cannot_change_status() {
        let mut store = seed::load_embedded().unwrap();
        let done = store.trips.find("T-002").unwrap().clone();
        let t = crud::edit::<TripsView>(
            &mut store,
            "T-002",
            FormValues::new()
                .with("revenue", "3000")
                .with("status", "IN_PROGRESS")
                .with("end", "2024-06-01T00:00"),
        )
        .unwrap();
        assert_eq!(t.status, TripStatus::Completed);
        assert_eq!(t.end_time, done.end_time);
        assert_eq!(t.revenue, 3000.0);

        let t = crud::edit::<TripsView>(
            &mut store,
            "T-001",
            FormValues::new().with("status", "COMPLETED"),
        )
        .unwrap();
        assert_eq!(t.status, TripStatus::InProgress);
        assert!(t.end_time.is_none());
    }

    #[test]
    fn test_create_ignores_status() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("vehicle", "V001")
            .with("driver", "D001")
            .with("origin", "Johannesburg")
            .with("destination", "Durban")
            .with("revenue", "100")
            .with("status", "COMPLETED");
        let t = crud::create::<TripsView>(&mut store, input, at("2024-05-20T09:15:00")).unwrap();
        assert_eq!(t.status, TripStatus::Pending);
        assert!(t.end_time.is_none());
    }

    #[test]
    fn test_summary_and_filter() {
        let store = seed::load_embedded().unwrap();
        let s = summary(&store);
        assert_eq!(s.total_revenue, 18300.0);
        assert_eq!((s.pending, s.in_progress, s.completed), (0, 1, 1));

        let done = crud::list::<TripsView>(&store, "", &Filter::Only(TripStatus::Completed));
        assert_eq!(done.len(), 1);
        assert_eq!(crud::list::<TripsView>(&store, "durban", &Filter::All).len(), 1);
    }
}
