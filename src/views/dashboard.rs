//! Control Center - fleet KPIs at a glance

use serde::Serialize;

use crate::core::store::FleetStore;
use crate::entities::{Alert, VehicleStatus};

/// Monthly fuel spend before the live month
const FUEL_HISTORY: [(&str, f64); 4] = [
    ("Jan", 12000.0),
    ("Feb", 19500.0),
    ("Mar", 15200.0),
    ("Apr", 21800.0),
];

const LIVE_MONTH: &str = "May";

/// How many alerts the dashboard shows
pub const ALERT_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub total_vehicles: usize,
    pub active_vehicles: usize,
    /// Active share of the fleet in percent, 0 for an empty fleet
    pub utilization: f64,
    /// Vehicles in MAINTENANCE
    pub incidents: usize,
    /// Total fuel spend
    pub opex: f64,
    pub fuel_trend: Vec<TrendPoint>,
    pub alerts: &'a [Alert],
}

impl Dashboard<'_> {
    /// Utilization rounded to one decimal, as shown on the tile
    pub fn utilization_label(&self) -> String {
        format!("{:.1}%", self.utilization)
    }
}

pub fn dashboard(store: &FleetStore) -> Dashboard<'_> {
    let vehicles = store.vehicles.items();
    let total = vehicles.len();
    let active = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Active)
        .count();
    let incidents = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Maintenance)
        .count();
    let opex: f64 = store.fuel.items().iter().map(|e| e.cost).sum();

    let utilization = if total == 0 {
        0.0
    } else {
        active as f64 / total as f64 * 100.0
    };

    let mut fuel_trend: Vec<TrendPoint> = FUEL_HISTORY
        .iter()
        .map(|&(month, cost)| TrendPoint { month, cost })
        .collect();
    fuel_trend.push(TrendPoint {
        month: LIVE_MONTH,
        cost: opex,
    });

    let alerts = store.alerts.items();

    Dashboard {
        total_vehicles: total,
        active_vehicles: active,
        utilization,
        incidents,
        opex,
        fuel_trend,
        alerts: &alerts[..alerts.len().min(ALERT_LIMIT)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use crate::entities::Vehicle;

    #[test]
    fn test_seed_dashboard() {
        let store = seed::load_embedded().unwrap();
        let d = dashboard(&store);
        assert_eq!(d.total_vehicles, 5);
        assert_eq!(d.active_vehicles, 3);
        assert_eq!(d.utilization_label(), "60.0%");
        assert_eq!(d.incidents, 1);
        assert_eq!(d.opex, 11400.0);
        assert_eq!(d.alerts.len(), 3);

        let months: Vec<_> = d.fuel_trend.iter().map(|p| p.month).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
        assert_eq!(d.fuel_trend[4].cost, 11400.0);
    }

    #[test]
    fn test_empty_fleet_has_zero_utilization() {
        let store = FleetStore::default();
        let d = dashboard(&store);
        assert_eq!(d.utilization, 0.0);
        assert_eq!(d.utilization_label(), "0.0%");
        assert_eq!(d.fuel_trend[4].cost, 0.0);
    }

    #[test]
    fn test_kpis_follow_store_changes() {
        let mut store = seed::load_embedded().unwrap();
        store.vehicles.append(Vehicle::new("V006", "TEST 1"));
        let d = dashboard(&store);
        assert_eq!(d.total_vehicles, 6);
        assert_eq!(d.utilization_label(), "66.7%");
    }

    #[test]
    fn test_alerts_capped_at_four() {
        let mut store = seed::load_embedded().unwrap();
        let extra: Vec<Alert> = store.alerts.items().to_vec();
        store.alerts.update(|prev| prev.iter().chain(extra.iter()).cloned().collect());
        assert_eq!(store.alerts.len(), 6);
        let d = dashboard(&store);
        assert_eq!(d.alerts.len(), ALERT_LIMIT);
        assert_eq!(d.alerts[3].id, "A001");
    }
}
