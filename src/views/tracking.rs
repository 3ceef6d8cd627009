//! Live Tracking - simulated vehicle telemetry around Johannesburg
//!
//! Positions are synthetic. Each vehicle starts near the city centre with a
//! random heading and speed, then drifts a fixed step per tick. Nothing here
//! reads real GPS data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::VecDeque;

use crate::core::search::matches_any;
use crate::entities::Vehicle;

/// Map bounding box
pub const MIN_LAT: f64 = -26.4;
pub const MAX_LAT: f64 = -25.9;
pub const MIN_LNG: f64 = 27.8;
pub const MAX_LNG: f64 = 28.4;

const START_LAT: f64 = -26.15;
const START_LNG: f64 = 28.10;
const START_SPREAD: f64 = 0.2;

/// Degrees moved along the heading per tick
pub const STEP: f64 = 0.0015;

/// Breadcrumb samples kept per vehicle
pub const TRAIL_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HubKind {
    Warehouse,
    Depot,
    Port,
    Hub,
}

impl HubKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HubKind::Warehouse => "Warehouse",
            HubKind::Depot => "Depot",
            HubKind::Port => "Port",
            HubKind::Hub => "Hub",
        }
    }
}

/// A fixed logistics site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsHub {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: HubKind,
    pub lat: f64,
    pub lng: f64,
}

const fn hub(id: &'static str, name: &'static str, kind: HubKind, lat: f64, lng: f64) -> LogisticsHub {
    LogisticsHub { id, name, kind, lat, lng }
}

pub static HUBS: [LogisticsHub; 10] = [
    hub("H1", "OR TAMBO INT AIRPORT", HubKind::Hub, -26.1367, 28.2411),
    hub("H2", "CITY DEEP TERMINAL", HubKind::Port, -26.2231, 28.1023),
    hub("H3", "MIDRAND DISTRO CENTER", HubKind::Warehouse, -25.9992, 28.1262),
    hub("H4", "SANDTON CORPORATE", HubKind::Depot, -26.1076, 28.0567),
    hub("H5", "PRETORIA WEST DEPOT", HubKind::Warehouse, -25.7505, 28.1364),
    hub("H6", "GERMISTON LOGISTICS", HubKind::Hub, -26.2267, 28.1667),
    hub("H7", "KEMPTON CARGO ZONE", HubKind::Warehouse, -26.0964, 28.2325),
    hub("H8", "CENTURION GATEWAY", HubKind::Depot, -25.8640, 28.1889),
    hub("H9", "SOWETO HUB", HubKind::Hub, -26.2485, 27.8540),
    hub("H10", "ROODEPOORT LOGISTICS", HubKind::Warehouse, -26.1625, 27.8722),
];

/// Position on the map in percent of the bounding box, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Project a coordinate into the map box. Points outside it are not clamped.
pub fn project(lat: f64, lng: f64) -> MapPoint {
    let pct = |v: f64, min: f64, max: f64| (v - min) / (max - min) * 100.0;
    MapPoint {
        x: pct(lng, MIN_LNG, MAX_LNG),
        y: 100.0 - pct(lat, MIN_LAT, MAX_LAT),
    }
}

/// Simulated state of one vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedAsset {
    pub vehicle_id: String,
    pub lat: f64,
    pub lng: f64,
    /// Degrees; may go negative
    pub heading: f64,
    /// km/h, never below zero
    pub speed: f64,
    pub trail: VecDeque<MapPoint>,
}

impl TrackedAsset {
    pub fn position(&self) -> MapPoint {
        project(self.lat, self.lng)
    }

    /// Straight-line distance in degrees to a hub
    pub fn distance_to(&self, hub: &LogisticsHub) -> f64 {
        ((hub.lat - self.lat).powi(2) + (hub.lng - self.lng).powi(2)).sqrt()
    }
}

/// Nearest of `hubs` to the asset; on a tie the earlier hub wins
pub fn nearest_hub_in<'h>(hubs: &'h [LogisticsHub], asset: &TrackedAsset) -> Option<&'h LogisticsHub> {
    hubs.iter().fold(None, |best, hub| match best {
        Some(prev) if asset.distance_to(hub) < asset.distance_to(prev) => Some(hub),
        Some(prev) => Some(prev),
        None => Some(hub),
    })
}

pub fn nearest_hub(asset: &TrackedAsset) -> &'static LogisticsHub {
    nearest_hub_in(&HUBS, asset).unwrap_or(&HUBS[0])
}

/// Hubs whose name matches the search box
pub fn filter_hubs(query: &str) -> Vec<&'static LogisticsHub> {
    HUBS.iter().filter(|h| matches_any(query, &[h.name])).collect()
}

/// Vehicles whose id or registration matches the search box
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], query: &str) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|v| matches_any(query, &[v.id.as_str(), v.registration_number.as_str()]))
        .collect()
}

/// The running simulation for one mount of the tracking view
#[derive(Debug, Clone)]
pub struct TrackingSim {
    rng: StdRng,
    assets: Vec<TrackedAsset>,
    ticks: u64,
}

impl TrackingSim {
    /// Place every vehicle at a random starting point
    pub fn new(vehicles: &[Vehicle], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let assets = vehicles
            .iter()
            .map(|v| TrackedAsset {
                vehicle_id: v.id.clone(),
                lat: START_LAT + (rng.random::<f64>() - 0.5) * START_SPREAD,
                lng: START_LNG + (rng.random::<f64>() - 0.5) * START_SPREAD,
                heading: (rng.random::<f64>() * 360.0).floor(),
                speed: 60.0 + rng.random::<f64>() * 40.0,
                trail: VecDeque::with_capacity(TRAIL_LEN),
            })
            .collect();
        Self {
            rng,
            assets,
            ticks: 0,
        }
    }

    pub fn assets(&self) -> &[TrackedAsset] {
        &self.assets
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn find(&self, vehicle_id: &str) -> Option<&TrackedAsset> {
        self.assets.iter().find(|a| a.vehicle_id == vehicle_id)
    }

    /// Advance every vehicle by one step
    pub fn tick(&mut self) {
        for asset in &mut self.assets {
            let rad = asset.heading.to_radians();
            asset.lat += rad.sin() * STEP;
            asset.lng += rad.cos() * STEP;

            if asset.trail.len() == TRAIL_LEN {
                asset.trail.pop_front();
            }
            asset.trail.push_back(project(asset.lat, asset.lng));

            asset.heading = (asset.heading + (self.rng.random::<f64>() - 0.5) * 8.0) % 360.0;
            asset.speed = (asset.speed + (self.rng.random::<f64>() - 0.5) * 4.0).max(0.0);
        }
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, assets = self.assets.len(), "tracking advanced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    fn sim(seed: u64) -> TrackingSim {
        let store = seed::load_embedded().unwrap();
        TrackingSim::new(store.vehicles.items(), seed)
    }

    fn asset_at(lat: f64, lng: f64) -> TrackedAsset {
        TrackedAsset {
            vehicle_id: "V001".to_string(),
            lat,
            lng,
            heading: 0.0,
            speed: 60.0,
            trail: VecDeque::new(),
        }
    }

    #[test]
    fn test_starting_positions_within_spread() {
        let s = sim(7);
        assert_eq!(s.assets().len(), 5);
        for a in s.assets() {
            assert!((a.lat - START_LAT).abs() <= START_SPREAD / 2.0 + 1e-12);
            assert!((a.lng - START_LNG).abs() <= START_SPREAD / 2.0 + 1e-12);
            assert!((0.0..360.0).contains(&a.heading));
            assert_eq!(a.heading, a.heading.floor());
            assert!((60.0..=100.0).contains(&a.speed));
            assert!(a.trail.is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = sim(42);
        let mut b = sim(42);
        for _ in 0..5 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.assets(), b.assets());
        assert_ne!(sim(1).assets(), sim(2).assets());
    }

    #[test]
    fn test_tick_moves_one_step_along_heading() {
        let mut s = sim(3);
        let before = s.assets()[0].clone();
        s.tick();
        let after = &s.assets()[0];
        let moved = ((after.lat - before.lat).powi(2) + (after.lng - before.lng).powi(2)).sqrt();
        assert!((moved - STEP).abs() < 1e-12);
        assert_eq!(after.trail.len(), 1);
        assert_eq!(after.trail[0], project(after.lat, after.lng));
        assert!(after.speed >= 0.0);
        let turn = (after.heading - before.heading).rem_euclid(360.0);
        assert!(turn <= 4.0 || turn >= 356.0);
    }

    #[test]
    fn test_trail_never_exceeds_twelve() {
        let mut s = sim(9);
        for _ in 0..30 {
            s.tick();
            assert!(s.assets().iter().all(|a| a.trail.len() <= TRAIL_LEN));
        }
        assert_eq!(s.assets()[0].trail.len(), TRAIL_LEN);
        assert_eq!(s.ticks(), 30);
    }

    #[test]
    fn test_projection() {
        let centre = project(-26.15, 28.10);
        assert!((centre.x - 50.0).abs() < 1e-9);
        assert!((centre.y - 50.0).abs() < 1e-9);
        let corner = project(MAX_LAT, MIN_LNG);
        assert!(corner.x.abs() < 1e-9);
        assert!(corner.y.abs() < 1e-9);
        // outside the box is not clamped
        assert!(project(-25.75, 28.0).y < 0.0);
    }

    #[test]
    fn test_nearest_hub_is_minimum_distance() {
        let s = sim(11);
        for asset in s.assets() {
            let nearest = nearest_hub(asset);
            let min = HUBS
                .iter()
                .map(|h| asset.distance_to(h))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(asset.distance_to(nearest), min);
        }
        assert_eq!(nearest_hub(&asset_at(-26.1367, 28.2411)).id, "H1");
        assert_eq!(nearest_hub(&asset_at(-26.25, 27.85)).id, "H9");
    }

    #[test]
    fn test_nearest_hub_tie_keeps_earlier() {
        let hubs = [
            hub("A", "WEST", HubKind::Depot, 0.0, -1.0),
            hub("B", "EAST", HubKind::Depot, 0.0, 1.0),
        ];
        let found = nearest_hub_in(&hubs, &asset_at(0.0, 0.0)).unwrap();
        assert_eq!(found.id, "A");
        assert!(nearest_hub_in(&[], &asset_at(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_search_filters() {
        let store = seed::load_embedded().unwrap();
        assert_eq!(filter_vehicles(store.vehicles.items(), "gp").len(), 2);
        assert_eq!(filter_vehicles(store.vehicles.items(), "v004").len(), 1);
        let hubs = filter_hubs("depot");
        assert_eq!(hubs.len(), 1);
        assert_eq!(hubs[0].id, "H5");
        assert_eq!(filter_hubs("").len(), 10);
    }
}
