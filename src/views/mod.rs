//! View components
//!
//! Each module reads the store and derives what one screen shows. The CRUD
//! views share [`crud`]; the rest are read-only or, for tracking, a
//! self-contained simulation.

pub mod alerts;
pub mod crud;
pub mod dashboard;
pub mod drivers;
pub mod fuel;
pub mod maintenance;
pub mod reports;
pub mod revenue;
pub mod routes;
pub mod tracking;
pub mod trips;
pub mod vehicles;
pub mod work_orders;

pub use crud::{CrudError, CrudView, Deletable};
pub use drivers::DriversView;
pub use fuel::FuelView;
pub use maintenance::MaintenanceView;
pub use revenue::RevenueView;
pub use routes::RoutesView;
pub use trips::{Transition, TripsView};
pub use vehicles::VehiclesView;
pub use work_orders::WorkOrdersView;
