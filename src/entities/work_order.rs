//! Work order entity type - repair tickets with a forward-only lifecycle

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{normalize_token, Entity};
use crate::core::identity::EntityKind;

/// Work order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(format!(
                "Invalid priority: {}. Use LOW, MEDIUM, HIGH, or CRITICAL",
                s
            )),
        }
    }
}

/// Work order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl WorkOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "OPEN",
            WorkOrderStatus::InProgress => "IN_PROGRESS",
            WorkOrderStatus::Resolved => "RESOLVED",
        }
    }

    pub fn all() -> &'static [WorkOrderStatus] {
        &[
            WorkOrderStatus::Open,
            WorkOrderStatus::InProgress,
            WorkOrderStatus::Resolved,
        ]
    }

    /// The only state reachable from this one, if any
    pub fn next(&self) -> Option<WorkOrderStatus> {
        match self {
            WorkOrderStatus::Open => Some(WorkOrderStatus::InProgress),
            WorkOrderStatus::InProgress => Some(WorkOrderStatus::Resolved),
            WorkOrderStatus::Resolved => None,
        }
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "open" => Ok(WorkOrderStatus::Open),
            "in_progress" => Ok(WorkOrderStatus::InProgress),
            "resolved" => Ok(WorkOrderStatus::Resolved),
            _ => Err(format!(
                "Invalid work order status: {}. Use OPEN, IN_PROGRESS, or RESOLVED",
                s
            )),
        }
    }
}

/// A repair or service ticket against a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,

    /// Vehicle the work is for (weak reference)
    pub vehicle_id: String,

    pub priority: Priority,

    pub description: String,

    pub status: WorkOrderStatus,

    pub created_at: NaiveDate,
}

impl Entity for WorkOrder {
    const KIND: EntityKind = EntityKind::WorkOrder;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.description.clone()
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}
