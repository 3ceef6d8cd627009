//! Entity kinds and record id generation
//!
//! Ids are synthesized from the current length of the collection the record
//! is appended to, one format per kind (`V001`, `T-001`, `WO-101`, ...).
//! Length-based ids are not unique once a record has been deleted: deleting
//! `V002` from five vehicles and adding one yields a second `V005`. The
//! behavior is kept for parity with the dashboard this data set comes from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The record types held by the fleet store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vehicle,
    Driver,
    Route,
    Fuel,
    Maintenance,
    Alert,
    Trip,
    WorkOrder,
    Revenue,
}

impl EntityKind {
    /// Machine name, used in logs and CSV headers
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicle",
            EntityKind::Driver => "driver",
            EntityKind::Route => "route",
            EntityKind::Fuel => "fuel",
            EntityKind::Maintenance => "maintenance",
            EntityKind::Alert => "alert",
            EntityKind::Trip => "trip",
            EntityKind::WorkOrder => "work_order",
            EntityKind::Revenue => "revenue",
        }
    }

    /// Human-readable singular name
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicle",
            EntityKind::Driver => "driver",
            EntityKind::Route => "route",
            EntityKind::Fuel => "fuel entry",
            EntityKind::Maintenance => "maintenance log",
            EntityKind::Alert => "alert",
            EntityKind::Trip => "trip",
            EntityKind::WorkOrder => "work order",
            EntityKind::Revenue => "revenue record",
        }
    }

    /// All kinds, in store order
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Vehicle,
            EntityKind::Driver,
            EntityKind::Route,
            EntityKind::Fuel,
            EntityKind::Maintenance,
            EntityKind::Alert,
            EntityKind::Trip,
            EntityKind::WorkOrder,
            EntityKind::Revenue,
        ]
    }

    /// Id for the record that will sit at 1-based `position` in its list.
    ///
    /// Callers pass `len + 1`. The zero padding is a literal prefix, not a
    /// width: position 10 of the vehicles list is `V0010`.
    pub fn id_for_position(&self, position: usize) -> String {
        match self {
            EntityKind::Vehicle => format!("V00{}", position),
            EntityKind::Driver => format!("D00{}", position),
            EntityKind::Route => format!("R00{}", position),
            EntityKind::Fuel => format!("F00{}", position),
            EntityKind::Maintenance => format!("M00{}", position),
            EntityKind::Alert => format!("A00{}", position),
            EntityKind::Trip => format!("T-00{}", position),
            EntityKind::WorkOrder => format!("WO-{}", 100 + position),
            EntityKind::Revenue => format!("REV-00{}", position),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an entity kind name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown entity kind '{0}'")]
pub struct KindParseError(pub String);

impl FromStr for EntityKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "vehicle" | "vehicles" => Ok(EntityKind::Vehicle),
            "driver" | "drivers" => Ok(EntityKind::Driver),
            "route" | "routes" => Ok(EntityKind::Route),
            "fuel" => Ok(EntityKind::Fuel),
            "maintenance" | "maint" => Ok(EntityKind::Maintenance),
            "alert" | "alerts" => Ok(EntityKind::Alert),
            "trip" | "trips" => Ok(EntityKind::Trip),
            "work_order" | "work_orders" | "work" => Ok(EntityKind::WorkOrder),
            "revenue" => Ok(EntityKind::Revenue),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}
