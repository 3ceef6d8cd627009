//! In-memory entity store
//!
//! Each collection is an ordered list with a single mutation primitive:
//! replace the whole list. Append, replace-by-id and remove-by-id all go
//! through [`Collection::set`], so every change bumps the revision counter
//! exactly once.

use miette::Diagnostic;
use thiserror::Error;

use crate::core::entity::Entity;
use crate::core::identity::EntityKind;
use crate::entities::{
    Alert, Driver, FuelEntry, MaintenanceLog, RevenueRecord, Route, Trip, Vehicle, WorkOrder,
};

/// Errors raised by store operations
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} '{id}' not found")]
    #[diagnostic(code(fleet::store::not_found), help("list the records to see the ids in use"))]
    NotFound { kind: EntityKind, id: String },
}

/// An ordered, revisioned list of one entity type
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
    revision: u64,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of times the list has been replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole list
    pub fn set(&mut self, items: Vec<T>) {
        self.items = items;
        self.revision += 1;
        tracing::debug!(
            collection = T::KIND.as_str(),
            revision = self.revision,
            len = self.items.len(),
            "collection replaced"
        );
    }

    /// Derive the next list from the current one
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&[T]) -> Vec<T>,
    {
        let next = f(&self.items);
        self.set(next);
    }

    /// Look up a record; dangling ids yield `None`
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Like [`find`](Self::find) but as an error for command handlers
    pub fn get(&self, id: &str) -> Result<&T, StoreError> {
        self.find(id).ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })
    }

    /// Id the next appended record receives
    pub fn next_id(&self) -> String {
        T::KIND.id_for_position(self.items.len() + 1)
    }

    /// Append a record at the end
    pub fn append(&mut self, item: T) {
        self.update(|prev| {
            let mut next = prev.to_vec();
            next.push(item);
            next
        });
    }

    /// Replace the record sharing `item`'s id, keeping its position
    pub fn replace(&mut self, item: T) -> Result<(), StoreError> {
        if self.find(item.id()).is_none() {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                id: item.id().to_string(),
            });
        }
        self.update(|prev| {
            prev.iter()
                .map(|existing| {
                    if existing.id() == item.id() {
                        item.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect()
        });
        Ok(())
    }

    /// Remove every record with `id`, returning the first removed
    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        let removed = self.get(id)?.clone();
        self.update(|prev| prev.iter().filter(|item| item.id() != id).cloned().collect());
        Ok(removed)
    }
}

/// All collections the dashboard works over
#[derive(Debug, Clone, Default)]
pub struct FleetStore {
    pub vehicles: Collection<Vehicle>,
    pub drivers: Collection<Driver>,
    pub routes: Collection<Route>,
    pub fuel: Collection<FuelEntry>,
    pub maintenance: Collection<MaintenanceLog>,
    pub alerts: Collection<Alert>,
    pub trips: Collection<Trip>,
    pub work_orders: Collection<WorkOrder>,
    pub revenue: Collection<RevenueRecord>,
}

impl FleetStore {
    /// Record count per kind, in store order
    pub fn counts(&self) -> Vec<(EntityKind, usize)> {
        vec![
            (EntityKind::Vehicle, self.vehicles.len()),
            (EntityKind::Driver, self.drivers.len()),
            (EntityKind::Route, self.routes.len()),
            (EntityKind::Fuel, self.fuel.len()),
            (EntityKind::Maintenance, self.maintenance.len()),
            (EntityKind::Alert, self.alerts.len()),
            (EntityKind::Trip, self.trips.len()),
            (EntityKind::WorkOrder, self.work_orders.len()),
            (EntityKind::Revenue, self.revenue.len()),
        ]
    }

    /// Registration of a vehicle, if the reference resolves
    pub fn vehicle_registration(&self, id: &str) -> Option<&str> {
        self.vehicles
            .find(id)
            .map(|v| v.registration_number.as_str())
    }

    /// Name of a driver, if the reference resolves
    pub fn driver_name(&self, id: &str) -> Option<&str> {
        self.drivers.find(id).map(|d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RevenueCategory, Vehicle};

    fn vehicles(n: usize) -> Collection<Vehicle> {
        Collection::new(
            (1..=n)
                .map(|i| Vehicle::new(format!("V00{}", i), format!("REG {}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_append_uses_length_based_id() {
        let mut c = vehicles(5);
        let id = c.next_id();
        assert_eq!(id, "V006");
        c.append(Vehicle::new(id, "TEST 1"));
        assert_eq!(c.len(), 6);
        assert_eq!(c.items().last().unwrap().registration_number, "TEST 1");
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn test_replace_preserves_order_and_count() {
        let mut c = vehicles(3);
        let mut edited = c.find("V002").unwrap().clone();
        edited.mileage = 99;
        c.replace(edited).unwrap();

        let ids: Vec<_> = c.items().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["V001", "V002", "V003"]);
        assert_eq!(c.find("V002").unwrap().mileage, 99);
        assert_eq!(c.find("V001").unwrap().mileage, 0);
    }

    #[test]
    fn test_replace_unknown_id_is_an_error() {
        let mut c = vehicles(2);
        let err = c.replace(Vehicle::new("V009", "X")).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                kind: EntityKind::Vehicle,
                id: "V009".to_string()
            }
        );
        assert_eq!(c.revision(), 0);
    }

    #[test]
    fn test_remove_keeps_others() {
        let mut c = vehicles(3);
        let removed = c.remove("V002").unwrap();
        assert_eq!(removed.id, "V002");
        assert!(c.find("V002").is_none());
        assert_eq!(c.len(), 2);
        assert!(c.remove("V002").is_err());
    }

    #[test]
    fn test_ids_collide_after_delete_then_create() {
        let mut c = vehicles(5);
        c.remove("V002").unwrap();
        assert_eq!(c.next_id(), "V005");
    }

    #[test]
    fn test_update_bumps_revision_once() {
        let mut store = FleetStore::default();
        store.revenue.update(|prev| {
            let mut next = prev.to_vec();
            next.push(RevenueRecord {
                id: "REV-001".to_string(),
                date: "2024-05-01".parse().unwrap(),
                amount: 10.0,
                source: "Acme".to_string(),
                category: RevenueCategory::Freight,
            });
            next
        });
        assert_eq!(store.revenue.revision(), 1);
        assert_eq!(store.vehicles.revision(), 0);
    }

    #[test]
    fn test_weak_reference_lookups() {
        let mut store = FleetStore::default();
        store.vehicles = vehicles(1);
        assert_eq!(store.vehicle_registration("V001"), Some("REG 1"));
        assert_eq!(store.vehicle_registration("V404"), None);
        assert_eq!(store.driver_name("D001"), None);
    }
}
