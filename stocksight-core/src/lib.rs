//! # Stocksight Core Library
//!
//! Shared library behind the stocksight inventory dashboard service.
//!
//! ## Features
//!
//! - **Entities**: products, stores, alerts, forecasts and KPI snapshots
//! - **Data store**: the `InventoryStore` contract and its in-memory arena implementation
//! - **Validation**: payload checks run before anything is written
//! - **Analytics**: CSV export, regional insights, chatbot replies and the what-if simulator
//!
//! ## Architecture
//!
//! The store is an explicit object created once at process start and handed
//! to the HTTP layer; nothing here is a global. Analytics are pure functions
//! over entity slices so they can be tested without a store.

pub mod alert;
pub mod chatbot;
pub mod datastore;
pub mod entity;
pub mod error;
pub mod export;
pub mod forecast;
pub mod insights;
pub mod metric;
pub mod product;
pub mod seed;
pub mod simulation;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use alert::{Alert, AlertKind, NewAlert, Severity};
pub use chatbot::{ChatIntent, ChatSnapshot};
pub use datastore::{InventoryStore, MemoryStore};
pub use entity::{EntityId, EntityKind, Record};
pub use error::{InventoryError, InventoryResult};
pub use forecast::{Forecast, NewForecast};
pub use insights::{RegionStats, RegionalInsights};
pub use metric::{Metric, NewMetric};
pub use product::{NewProduct, Priority, Product, ProductPatch};
pub use simulation::{Scenario, SimulationResult};
pub use store::{DemandLevel, NewStore, Store};
pub use validation::{ValidationLimits, Validator};

/// Version information for stocksight
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum length for `sku` and `storeId`
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 64;
