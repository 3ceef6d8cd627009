//! Analytics - headline business figures
//!
//! Only the freight value is computed. The remaining KPIs and the archive
//! list are fixed figures, and exporting a report only acknowledges the
//! request.

use serde::Serialize;

use crate::core::entity::normalize_token;
use crate::core::store::FleetStore;
use crate::views::revenue;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_freight_value: f64,
    pub operational_margin: &'static str,
    pub fleet_uptime: &'static str,
    pub pending_audits: u32,
}

/// A previously generated report shown in the archive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchivedReport {
    pub title: &'static str,
    pub date: &'static str,
    pub size: &'static str,
}

pub const ARCHIVE: [ArchivedReport; 4] = [
    ArchivedReport {
        title: "Monthly Maintenance Audit",
        date: "May 20, 2024",
        size: "2.4 MB",
    },
    ArchivedReport {
        title: "Quarterly Fuel Efficiency Telemetry",
        date: "Apr 15, 2024",
        size: "1.1 MB",
    },
    ArchivedReport {
        title: "Operator Performance Matrix",
        date: "May 01, 2024",
        size: "4.8 MB",
    },
    ArchivedReport {
        title: "Regulatory Compliance (License Registry)",
        date: "May 19, 2024",
        size: "0.4 MB",
    },
];

pub fn kpis(store: &FleetStore) -> Kpis {
    Kpis {
        total_freight_value: revenue::total(store),
        operational_margin: "34.2%",
        fleet_uptime: "98.5%",
        pending_audits: 2,
    }
}

/// Export formats offered by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Csv,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "PDF",
            ExportKind::Csv => "CSV",
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "pdf" => Ok(ExportKind::Pdf),
            "csv" => Ok(ExportKind::Csv),
            _ => Err(format!("Invalid export format: {}. Use pdf or csv", s)),
        }
    }
}

/// Acknowledge an export request; nothing is generated
pub fn export_notice(kind: ExportKind) -> String {
    tracing::info!(format = kind.as_str(), "report export requested");
    format!("Generating {} report...", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn test_kpis_sum_revenue() {
        let mut store = seed::load_embedded().unwrap();
        assert_eq!(kpis(&store).total_freight_value, 97900.0);
        store.revenue.set(Vec::new());
        let k = kpis(&store);
        assert_eq!(k.total_freight_value, 0.0);
        assert_eq!(k.operational_margin, "34.2%");
        assert_eq!(k.pending_audits, 2);
    }

    #[test]
    fn test_export_is_a_notice_only() {
        assert_eq!(export_notice(ExportKind::Pdf), "Generating PDF report...");
        assert_eq!("csv".parse::<ExportKind>().unwrap(), ExportKind::Csv);
        assert!("xlsx".parse::<ExportKind>().is_err());
    }
}
