//! FleetTrack: a terminal fleet-management dashboard
//!
//! Vehicles, drivers, routes, trips, work orders, fuel, maintenance and
//! revenue live in an in-memory store seeded at start-up. The views derive
//! what each screen shows; the CLI renders them one command at a time or
//! inside `fleet shell`.

pub mod cli;
pub mod core;
pub mod entities;
pub mod views;
