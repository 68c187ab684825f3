//! Data store abstraction for stocksight
//!
//! The store owns every entity instance and assigns ids and creation
//! timestamps. Backends implement the per-kind list/get/insert core; the
//! filtered reads (`active_alerts`, `forecasts_by_product`, ...) come as
//! provided methods built on that core and may be overridden.

pub mod memory;

use crate::alert::{Alert, NewAlert};
use crate::entity::EntityId;
use crate::forecast::{Forecast, NewForecast};
use crate::metric::{Metric, NewMetric};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::store::{NewStore, Store};

pub use memory::MemoryStore;

/// Storage contract for the five entity kinds.
///
/// # Implementation Requirements
///
/// All implementations MUST:
/// - Assign ids per kind, strictly increasing, never reused
/// - Return lists in insertion order
/// - Treat an unknown id as `None`, never as an error
/// - Perform id assignment and insertion atomically when shared across threads
///
/// Input is assumed to be valid: rejecting malformed records is the caller's
/// job, so inserts cannot fail.
pub trait InventoryStore: Send + Sync {
    /// All products in insertion order
    fn products(&self) -> Vec<Product>;

    fn product(&self, id: EntityId) -> Option<Product>;

    fn insert_product(&self, product: NewProduct) -> Product;

    /// Merge `patch` over an existing product.
    ///
    /// Returns `None` without touching the table when `id` is unknown.
    fn update_product(&self, id: EntityId, patch: ProductPatch) -> Option<Product>;

    fn stores(&self) -> Vec<Store>;

    fn store(&self, id: EntityId) -> Option<Store>;

    fn insert_store(&self, store: NewStore) -> Store;

    /// All alerts, active or not
    fn alerts(&self) -> Vec<Alert>;

    fn insert_alert(&self, alert: NewAlert) -> Alert;

    fn forecasts(&self) -> Vec<Forecast>;

    fn insert_forecast(&self, forecast: NewForecast) -> Forecast;

    /// All metric snapshots in insertion order
    fn metrics(&self) -> Vec<Metric>;

    fn insert_metric(&self, metric: NewMetric) -> Metric;

    /// Alerts with `is_active == true`
    fn active_alerts(&self) -> Vec<Alert> {
        self.alerts()
            .into_iter()
            .filter(|alert| alert.is_active)
            .collect()
    }

    fn forecasts_by_product(&self, product_id: EntityId) -> Vec<Forecast> {
        self.forecasts()
            .into_iter()
            .filter(|forecast| forecast.product_id == Some(product_id))
            .collect()
    }

    fn forecasts_by_store(&self, store_id: EntityId) -> Vec<Forecast> {
        self.forecasts()
            .into_iter()
            .filter(|forecast| forecast.store_id == Some(store_id))
            .collect()
    }

    /// The most recently inserted snapshot (by insertion order, not by date)
    fn latest_metric(&self) -> Option<Metric> {
        self.metrics().pop()
    }
}
