//! Stocksight API Service Library
//!
//! HTTP surface of the inventory dashboard: CRUD over the entity tables,
//! the recommendations export, regional insights, the chatbot and the
//! scenario simulator.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod service;

use anyhow::Result;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use stocksight_core::{InventoryStore, Validator};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::ApiError;
pub use metrics::HttpMetrics;
pub use service::InventoryService;

use handlers::*;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InventoryService>,
    pub config: Arc<ApiConfig>,
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>, config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let validator = Validator::new(config.validation_limits());
        Ok(Self {
            service: Arc::new(InventoryService::new(store, validator)),
            config: Arc::new(config),
            metrics: Arc::new(HttpMetrics::new()?),
        })
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(get_product_handler).patch(update_product_handler),
        )
        .route(
            "/api/stores",
            get(list_stores_handler).post(create_store_handler),
        )
        .route("/api/stores/:id", get(get_store_handler))
        .route(
            "/api/alerts",
            get(list_alerts_handler).post(create_alert_handler),
        )
        .route(
            "/api/forecasts",
            get(list_forecasts_handler).post(create_forecast_handler),
        )
        .route(
            "/api/forecasts/product/:product_id",
            get(product_forecasts_handler),
        )
        .route("/api/forecasts/store/:store_id", get(store_forecasts_handler))
        .route(
            "/api/metrics",
            get(latest_metric_handler).post(create_metric_handler),
        )
        .route(
            "/api/export/recommendations",
            get(export_recommendations_handler),
        )
        .route("/api/insights/regions", get(regional_insights_handler))
        .route("/api/chatbot", post(chatbot_handler))
        .route("/api/simulate", post(simulate_handler))
        .route("/health", get(health_handler));

    let api = if state.config.metrics.enable_prometheus {
        api.route(&state.config.metrics.metrics_path, get(metrics_handler))
    } else {
        api
    };

    api.route_layer(middleware::from_fn_with_state(
        state.metrics.clone(),
        metrics::track_requests,
    ))
    .layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::new()),
    )
    .with_state(state)
}
