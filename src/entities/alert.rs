//! Alert entity type - display-only notices

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{normalize_token, Entity};
use crate::core::identity::EntityKind;

/// What an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Maintenance,
    License,
    Route,
    Finance,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Maintenance => "maintenance",
            AlertType::License => "license",
            AlertType::Route => "route",
            AlertType::Finance => "finance",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("Invalid severity: {}. Use low, medium, or high", s)),
        }
    }
}

/// A system alert shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub severity: Severity,
    pub date: NaiveDate,
}

impl Entity for Alert {
    const KIND: EntityKind = EntityKind::Alert;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.message.clone()
    }

    fn status(&self) -> &str {
        self.severity.as_str()
    }
}

impl Alert {
    /// Event id shown next to the alert ("EV-A001")
    pub fn event_id(&self) -> String {
        format!("EV-{}", self.id)
    }
}
