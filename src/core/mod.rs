//! Core module - fundamental types and utilities

pub mod config;
pub mod entity;
pub mod form;
pub mod identity;
pub mod router;
pub mod search;
pub mod seed;
pub mod state;
pub mod store;
pub mod ticker;

pub use config::{Config, ConfigError};
pub use entity::Entity;
pub use form::{FieldKind, FieldSpec, FormError, FormValues};
pub use identity::{EntityKind, KindParseError};
pub use router::{Resolved, View};
pub use search::{matches_any, Filter};
pub use seed::SeedError;
pub use state::{AppState, Session, Theme};
pub use store::{Collection, FleetStore, StoreError};
pub use ticker::PeriodicTask;
