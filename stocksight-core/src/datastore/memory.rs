//! In-memory store: one arena table per entity kind.
//!
//! Each table is a growable `Vec` of rows plus a monotonic id counter, both
//! behind the same lock, so assigning an id and storing the row happen as one
//! step. Rows are never removed, so they stay sorted by id and lookups are a
//! binary search.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, trace};

use super::InventoryStore;
use crate::alert::{Alert, NewAlert};
use crate::entity::{EntityId, Record};
use crate::forecast::{Forecast, NewForecast};
use crate::metric::{Metric, NewMetric};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::store::{NewStore, Store};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: EntityId,
}

impl<T: Record> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(EntityId, DateTime<Utc>) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id, Utc::now());
        self.rows.push(row.clone());
        trace!("Inserted {} {}", T::KIND, id);
        row
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.rows.binary_search_by_key(&id, |row| row.id()).ok()
    }

    fn get(&self, id: EntityId) -> Option<T> {
        self.position(id).map(|idx| self.rows[idx].clone())
    }

    fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        let idx = self.position(id)?;
        Some(&mut self.rows[idx])
    }

    fn all(&self) -> Vec<T> {
        self.rows.clone()
    }
}

/// Process-lifetime store backed by in-memory tables
#[derive(Debug)]
pub struct MemoryStore {
    products: RwLock<Table<Product>>,
    stores: RwLock<Table<Store>>,
    alerts: RwLock<Table<Alert>>,
    forecasts: RwLock<Table<Forecast>>,
    metrics: RwLock<Table<Metric>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Table::new()),
            stores: RwLock::new(Table::new()),
            alerts: RwLock::new(Table::new()),
            forecasts: RwLock::new(Table::new()),
            metrics: RwLock::new(Table::new()),
        }
    }

    /// Create a store pre-populated with the dashboard's mock records
    pub fn seeded() -> Self {
        let store = Self::new();
        crate::seed::seed_mock_data(&store);
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for MemoryStore {
    fn products(&self) -> Vec<Product> {
        self.products.read().all()
    }

    fn product(&self, id: EntityId) -> Option<Product> {
        self.products.read().get(id)
    }

    fn insert_product(&self, product: NewProduct) -> Product {
        self.products
            .write()
            .insert_with(|id, now| Product::from_new(id, now, product))
    }

    fn update_product(&self, id: EntityId, patch: ProductPatch) -> Option<Product> {
        let mut table = self.products.write();
        let Some(existing) = table.get_mut(id) else {
            debug!("Update skipped, product {} does not exist", id);
            return None;
        };
        existing.apply(patch);
        Some(existing.clone())
    }

    fn stores(&self) -> Vec<Store> {
        self.stores.read().all()
    }

    fn store(&self, id: EntityId) -> Option<Store> {
        self.stores.read().get(id)
    }

    fn insert_store(&self, store: NewStore) -> Store {
        self.stores
            .write()
            .insert_with(|id, now| Store::from_new(id, now, store))
    }

    fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().all()
    }

    fn insert_alert(&self, alert: NewAlert) -> Alert {
        self.alerts
            .write()
            .insert_with(|id, now| Alert::from_new(id, now, alert))
    }

    fn forecasts(&self) -> Vec<Forecast> {
        self.forecasts.read().all()
    }

    fn insert_forecast(&self, forecast: NewForecast) -> Forecast {
        self.forecasts
            .write()
            .insert_with(|id, now| Forecast::from_new(id, now, forecast))
    }

    fn metrics(&self) -> Vec<Metric> {
        self.metrics.read().all()
    }

    fn insert_metric(&self, metric: NewMetric) -> Metric {
        self.metrics
            .write()
            .insert_with(|id, now| Metric::from_new(id, now, metric))
    }

    fn active_alerts(&self) -> Vec<Alert> {
        self.alerts
            .read()
            .rows
            .iter()
            .filter(|alert| alert.is_active)
            .cloned()
            .collect()
    }

    fn latest_metric(&self) -> Option<Metric> {
        self.metrics.read().rows.last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Priority;

    fn product(sku: &str) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            name: format!("Product {}", sku),
            category: "Electronics".to_string(),
            current_stock: 10,
            predicted_demand: 20,
            recommended_reorder: 25,
            priority: Priority::Medium,
            days_until_stockout: Some(4),
        }
    }

    #[test]
    fn test_table_ids_start_at_one() {
        let store = MemoryStore::new();
        let first = store.insert_product(product("A"));
        let second = store.insert_product(product("B"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_counters_are_per_kind() {
        let store = MemoryStore::new();
        store.insert_product(product("A"));
        store.insert_product(product("B"));

        let metric = store.insert_metric(NewMetric {
            total_products: 2,
            total_stores: 0,
            cost_savings: "0".to_string(),
            forecast_accuracy: "0".to_string(),
        });
        assert_eq!(metric.id, 1);
    }

    #[test]
    fn test_update_does_not_consume_ids() {
        let store = MemoryStore::new();
        let first = store.insert_product(product("A"));
        store.update_product(
            first.id,
            ProductPatch {
                current_stock: Some(1),
                ..Default::default()
            },
        );
        assert!(store.update_product(99, ProductPatch::default()).is_none());

        let second = store.insert_product(product("B"));
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_latest_metric_empty_store() {
        let store = MemoryStore::new();
        assert!(store.latest_metric().is_none());
        assert!(store.metrics().is_empty());
    }

    #[test]
    fn test_seeded_store_has_mock_records() {
        let store = MemoryStore::seeded();
        assert_eq!(store.products().len(), 4);
        assert_eq!(store.stores().len(), 8);
        assert_eq!(store.active_alerts().len(), 3);
        assert!(store.forecasts().is_empty());
        assert_eq!(store.latest_metric().unwrap().cost_savings, "2800000");
    }
}
