//! Embedded seed data
//!
//! The initial fleet ships inside the binary as `seed/fleet.yaml` and is
//! parsed fresh on every start, so every run begins from the same state.

use miette::{Diagnostic, NamedSource, SourceSpan};
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::core::store::{Collection, FleetStore};
use crate::entities::{
    Alert, Driver, FuelEntry, MaintenanceLog, RevenueRecord, Route, Trip, Vehicle, WorkOrder,
};

const SEED_FILE: &str = "fleet.yaml";

#[derive(Embed)]
#[folder = "seed/"]
struct EmbeddedSeed;

/// Seed YAML that failed to parse, pointing at the offending spot
#[derive(Debug, Error, Diagnostic)]
#[error("seed data is malformed: {message}")]
#[diagnostic(code(fleet::seed::syntax))]
pub struct SeedSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

#[derive(Debug, Error, Diagnostic)]
pub enum SeedError {
    #[error("embedded seed file '{0}' is missing")]
    #[diagnostic(code(fleet::seed::missing))]
    Missing(String),

    #[error("embedded seed file is not valid UTF-8")]
    Encoding,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SeedSyntaxError),
}

/// Shape of the seed document
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub routes: Vec<Route>,
    pub fuel: Vec<FuelEntry>,
    pub maintenance: Vec<MaintenanceLog>,
    pub alerts: Vec<Alert>,
    pub trips: Vec<Trip>,
    pub work_orders: Vec<WorkOrder>,
    pub revenue: Vec<RevenueRecord>,
}

impl From<SeedData> for FleetStore {
    fn from(seed: SeedData) -> Self {
        FleetStore {
            vehicles: Collection::new(seed.vehicles),
            drivers: Collection::new(seed.drivers),
            routes: Collection::new(seed.routes),
            fuel: Collection::new(seed.fuel),
            maintenance: Collection::new(seed.maintenance),
            alerts: Collection::new(seed.alerts),
            trips: Collection::new(seed.trips),
            work_orders: Collection::new(seed.work_orders),
            revenue: Collection::new(seed.revenue),
        }
    }
}

/// Build the store from the seed compiled into the binary
pub fn load_embedded() -> Result<FleetStore, SeedError> {
    let file = EmbeddedSeed::get(SEED_FILE).ok_or_else(|| SeedError::Missing(SEED_FILE.to_string()))?;
    let source = std::str::from_utf8(file.data.as_ref()).map_err(|_| SeedError::Encoding)?;
    let store = parse(source, SEED_FILE)?;
    tracing::debug!(counts = ?store.counts(), "seed loaded");
    Ok(store)
}

/// Parse seed YAML into a fresh store
pub fn parse(source: &str, name: &str) -> Result<FleetStore, SeedError> {
    let seed: SeedData = serde_yml::from_str(source).map_err(|err| {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));
        let offset = line_col_to_offset(source, line, column);
        SeedSyntaxError {
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            message: err.to_string(),
        }
    })?;
    Ok(seed.into())
}

/// Byte offset of a 1-based line/column, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>();
    (line_start + column.saturating_sub(1)).min(source.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{TripStatus, VehicleStatus, WorkOrderStatus};

    #[test]
    fn test_embedded_seed_counts() {
        let store = load_embedded().unwrap();
        assert_eq!(store.vehicles.len(), 5);
        assert_eq!(store.drivers.len(), 4);
        assert_eq!(store.routes.len(), 2);
        assert_eq!(store.fuel.len(), 4);
        assert_eq!(store.maintenance.len(), 2);
        assert_eq!(store.alerts.len(), 3);
        assert_eq!(store.trips.len(), 2);
        assert_eq!(store.work_orders.len(), 2);
        assert_eq!(store.revenue.len(), 2);
    }

    #[test]
    fn test_embedded_seed_values() {
        let store = load_embedded().unwrap();
        let v003 = store.vehicles.find("V003").unwrap();
        assert_eq!(v003.status, VehicleStatus::Maintenance);
        assert_eq!(v003.registration_number, "ND 992-001");

        let d003 = store.drivers.find("D003").unwrap();
        assert!(d003.assigned_vehicle_id.is_none());

        let t1 = store.trips.find("T-001").unwrap();
        assert_eq!(t1.status, TripStatus::InProgress);
        assert!(t1.end_time.is_none());

        let wo = store.work_orders.find("WO-102").unwrap();
        assert_eq!(wo.status, WorkOrderStatus::Open);
    }

    #[test]
    fn test_seed_revisions_start_at_zero() {
        let store = load_embedded().unwrap();
        assert_eq!(store.vehicles.revision(), 0);
    }

    #[test]
    fn test_malformed_seed_reports_location() {
        let err = parse("vehicles:\n  - { id: V001, type: Boat }\n", "bad.yaml").unwrap_err();
        assert!(matches!(err, SeedError::Syntax(_)));
    }

    #[test]
    fn test_empty_seed_gives_empty_store() {
        let store = parse("{}", "empty.yaml").unwrap();
        assert!(store.vehicles.is_empty());
    }

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 3, 2), 13);
        assert_eq!(line_col_to_offset(source, 9, 9), 16);
    }
}
