//! Revenue record entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{normalize_token, Entity};
use crate::core::identity::EntityKind;

/// Revenue stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueCategory {
    #[default]
    Freight,
    Logistics,
    Consulting,
}

impl RevenueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueCategory::Freight => "FREIGHT",
            RevenueCategory::Logistics => "LOGISTICS",
            RevenueCategory::Consulting => "CONSULTING",
        }
    }

    pub fn all() -> &'static [RevenueCategory] {
        &[
            RevenueCategory::Freight,
            RevenueCategory::Logistics,
            RevenueCategory::Consulting,
        ]
    }
}

impl std::fmt::Display for RevenueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RevenueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "freight" => Ok(RevenueCategory::Freight),
            "logistics" => Ok(RevenueCategory::Logistics),
            "consulting" => Ok(RevenueCategory::Consulting),
            _ => Err(format!(
                "Invalid revenue category: {}. Use FREIGHT, LOGISTICS, or CONSULTING",
                s
            )),
        }
    }
}

/// A booked revenue line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    pub id: String,
    pub date: NaiveDate,
    /// Amount in rand
    pub amount: f64,
    /// Client or contract the money came from
    pub source: String,
    pub category: RevenueCategory,
}

impl Entity for RevenueRecord {
    const KIND: EntityKind = EntityKind::Revenue;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.source.clone()
    }

    fn status(&self) -> &str {
        self.category.as_str()
    }
}
