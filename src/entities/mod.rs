//! Entity type definitions
//!
//! FleetTrack keeps the following record types in memory:
//!
//! **Assets & people:**
//! - [`Vehicle`] - Fleet vehicles with registration, fuel type and status
//! - [`Driver`] - Licensed drivers, optionally assigned to a vehicle
//!
//! **Operations:**
//! - [`Route`] - Scheduled runs with optional driver/vehicle assignment
//! - [`Trip`] - Dispatched journeys (PENDING → COMPLETED)
//! - [`WorkOrder`] - Repair tickets (OPEN → IN_PROGRESS → RESOLVED)
//!
//! **Logs & finance:**
//! - [`FuelEntry`] - Refuelling records
//! - [`MaintenanceLog`] - Completed services
//! - [`RevenueRecord`] - Booked revenue
//! - [`Alert`] - Display-only notices
//!
//! Foreign-key fields (`vehicle_id`, `assigned_driver_id`, ...) are weak
//! references: nothing guarantees the target still exists.

pub mod alert;
pub mod driver;
pub mod fuel;
pub mod maintenance;
pub mod province;
pub mod revenue;
pub mod route;
pub mod trip;
pub mod vehicle;
pub mod work_order;

pub use alert::{Alert, AlertType, Severity};
pub use driver::{Driver, DriverStatus};
pub use fuel::FuelEntry;
pub use maintenance::MaintenanceLog;
pub use province::Province;
pub use revenue::{RevenueCategory, RevenueRecord};
pub use route::Route;
pub use trip::{Trip, TripStatus};
pub use vehicle::{FuelType, Vehicle, VehicleStatus, VehicleType};
pub use work_order::{Priority, WorkOrder, WorkOrderStatus};
