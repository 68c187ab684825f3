//! Inventory service: the layer between HTTP handlers and the store.
//!
//! Reads go straight to the store. Every mutation validates its input first
//! and then runs under a single write gate, so uniqueness checks and the
//! insert they guard cannot interleave with another writer.

use std::sync::Arc;
use stocksight_core::{
    chatbot::{self, ChatIntent, ChatSnapshot},
    export, insights, simulation, Alert, EntityId, EntityKind, Forecast, InventoryError,
    InventoryResult, InventoryStore, Metric, NewAlert, NewForecast, NewMetric, NewProduct,
    NewStore, Product, ProductPatch, RegionalInsights, Scenario, SimulationResult, Store,
    Validator,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
    validator: Validator,
    write_gate: Mutex<()>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStore>, validator: Validator) -> Self {
        Self {
            store,
            validator,
            write_gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn InventoryStore> {
        &self.store
    }

    // Products

    pub fn list_products(&self) -> Vec<Product> {
        self.store.products()
    }

    pub fn get_product(&self, id: EntityId) -> InventoryResult<Product> {
        self.store
            .product(id)
            .ok_or_else(|| InventoryError::not_found(EntityKind::Product, id))
    }

    pub async fn create_product(&self, new: NewProduct) -> InventoryResult<Product> {
        self.validator.validate_new_product(&new)?;

        let _guard = self.write_gate.lock().await;
        self.ensure_unique_sku(&new.sku, None)?;

        let product = self.store.insert_product(new);
        info!("Created product {} ({})", product.id, product.sku);
        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: EntityId,
        patch: ProductPatch,
    ) -> InventoryResult<Product> {
        self.validator.validate_product_patch(&patch)?;

        let _guard = self.write_gate.lock().await;
        if self.store.product(id).is_none() {
            return Err(InventoryError::not_found(EntityKind::Product, id));
        }
        if let Some(sku) = &patch.sku {
            self.ensure_unique_sku(sku, Some(id))?;
        }

        let product = self
            .store
            .update_product(id, patch)
            .ok_or_else(|| InventoryError::not_found(EntityKind::Product, id))?;
        info!("Updated product {} ({})", product.id, product.sku);
        Ok(product)
    }

    fn ensure_unique_sku(&self, sku: &str, except: Option<EntityId>) -> InventoryResult<()> {
        let taken = self
            .store
            .products()
            .iter()
            .any(|product| product.sku == sku && Some(product.id) != except);
        if taken {
            return Err(InventoryError::validation(format!(
                "sku '{}' is already in use",
                sku
            )));
        }
        Ok(())
    }

    // Stores

    pub fn list_stores(&self) -> Vec<Store> {
        self.store.stores()
    }

    pub fn get_store(&self, id: EntityId) -> InventoryResult<Store> {
        self.store
            .store(id)
            .ok_or_else(|| InventoryError::not_found(EntityKind::Store, id))
    }

    pub async fn create_store(&self, new: NewStore) -> InventoryResult<Store> {
        self.validator.validate_new_store(&new)?;

        let _guard = self.write_gate.lock().await;
        if self
            .store
            .stores()
            .iter()
            .any(|store| store.store_id == new.store_id)
        {
            return Err(InventoryError::validation(format!(
                "storeId '{}' is already in use",
                new.store_id
            )));
        }

        let store = self.store.insert_store(new);
        info!("Created store {} ({})", store.id, store.store_id);
        Ok(store)
    }

    // Alerts

    pub fn list_alerts(&self, include_inactive: bool) -> Vec<Alert> {
        if include_inactive {
            self.store.alerts()
        } else {
            self.store.active_alerts()
        }
    }

    pub async fn create_alert(&self, new: NewAlert) -> InventoryResult<Alert> {
        self.validator.validate_new_alert(&new)?;

        let _guard = self.write_gate.lock().await;
        let alert = self.store.insert_alert(new);
        info!("Created alert {} ({:?})", alert.id, alert.kind);
        Ok(alert)
    }

    // Forecasts

    pub fn list_forecasts(&self) -> Vec<Forecast> {
        self.store.forecasts()
    }

    pub fn forecasts_for_product(&self, product_id: EntityId) -> Vec<Forecast> {
        self.store.forecasts_by_product(product_id)
    }

    pub fn forecasts_for_store(&self, store_id: EntityId) -> Vec<Forecast> {
        self.store.forecasts_by_store(store_id)
    }

    pub async fn create_forecast(&self, new: NewForecast) -> InventoryResult<Forecast> {
        self.validator.validate_new_forecast(&new)?;

        let _guard = self.write_gate.lock().await;
        let forecast = self.store.insert_forecast(new);
        info!("Created forecast {}", forecast.id);
        Ok(forecast)
    }

    // Metrics

    pub fn latest_metric(&self) -> Option<Metric> {
        self.store.latest_metric()
    }

    pub async fn create_metric(&self, new: NewMetric) -> InventoryResult<Metric> {
        self.validator.validate_new_metric(&new)?;

        let _guard = self.write_gate.lock().await;
        let metric = self.store.insert_metric(new);
        info!("Recorded metric snapshot {}", metric.id);
        Ok(metric)
    }

    // Derived views

    pub fn export_recommendations(&self) -> String {
        let products = self.store.products();
        debug!("Exporting {} recommendations", products.len());
        export::recommendations_csv(&products)
    }

    pub fn regional_insights(&self) -> RegionalInsights {
        insights::regional_insights(&self.store.stores())
    }

    /// Answer a dashboard chat message
    pub fn chat(&self, message: &str) -> InventoryResult<String> {
        if message.trim().is_empty() {
            return Err(InventoryError::validation("message cannot be empty"));
        }

        let intent = ChatIntent::classify(message);
        debug!("Chat message classified as {:?}", intent);

        let snapshot = ChatSnapshot::collect(
            &self.store.products(),
            &self.store.active_alerts(),
            &self.store.stores(),
            self.store.latest_metric().as_ref(),
        );
        Ok(chatbot::respond(intent, &snapshot))
    }

    pub fn simulate(&self, scenario: &Scenario) -> SimulationResult {
        simulation::simulate(scenario)
    }

    /// Row counts per entity kind
    pub fn entity_counts(&self) -> Vec<(EntityKind, usize)> {
        EntityKind::ALL
            .iter()
            .map(|kind| {
                let count = match kind {
                    EntityKind::Product => self.store.products().len(),
                    EntityKind::Store => self.store.stores().len(),
                    EntityKind::Alert => self.store.alerts().len(),
                    EntityKind::Forecast => self.store.forecasts().len(),
                    EntityKind::Metric => self.store.metrics().len(),
                };
                (*kind, count)
            })
            .collect()
    }
}
