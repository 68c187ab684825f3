use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use stocksight_core::{
    export::RECOMMENDATIONS_CSV_FILENAME, Alert, EntityId, EntityKind, Forecast, InventoryError,
    Metric, NewAlert, NewForecast, NewMetric, NewProduct, NewStore, Product, ProductPatch,
    RegionalInsights, Scenario, SimulationResult, Store,
};
use tracing::{debug, info};

use crate::error::{ApiError, JsonBody};
use crate::AppState;

type ApiResult<T> = Result<T, ApiError>;

/// Parse a path id. A key that is not a `u64` can never name an entity,
/// so callers treat `None` as absent.
fn parse_id(raw: &str) -> Option<EntityId> {
    raw.parse::<EntityId>().ok()
}

/// Resolve a path id for a single-entity route, 404 when it cannot match
fn require_id(kind: EntityKind, raw: &str) -> ApiResult<EntityId> {
    parse_id(raw).ok_or_else(|| ApiError(InventoryError::not_found_key(kind, raw)))
}

/// Health check endpoint
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "stocksight-api",
        "version": stocksight_core::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Metrics endpoint (Prometheus format)
pub async fn metrics_handler(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    state
        .metrics
        .set_entity_counts(&state.service.entity_counts());
    let body = state.metrics.render()?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}

// Products

pub async fn list_products_handler(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.service.list_products();
    debug!("Listing {} products", products.len());
    Json(products)
}

pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = require_id(EntityKind::Product, &id)?;
    Ok(Json(state.service.get_product(id)?))
}

pub async fn create_product_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state.service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> ApiResult<Json<Product>> {
    let id = require_id(EntityKind::Product, &id)?;
    Ok(Json(state.service.update_product(id, patch).await?))
}

// Stores

pub async fn list_stores_handler(State(state): State<AppState>) -> Json<Vec<Store>> {
    Json(state.service.list_stores())
}

pub async fn get_store_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Store>> {
    let id = require_id(EntityKind::Store, &id)?;
    Ok(Json(state.service.get_store(id)?))
}

pub async fn create_store_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewStore>,
) -> ApiResult<(StatusCode, Json<Store>)> {
    let store = state.service.create_store(payload).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

// Alerts

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertListParams {
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn list_alerts_handler(
    State(state): State<AppState>,
    params: Result<Query<AlertListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Alert>>> {
    let Query(params) = params.map_err(|rejection| {
        ApiError(InventoryError::validation(rejection.body_text()))
    })?;
    Ok(Json(state.service.list_alerts(params.include_inactive)))
}

pub async fn create_alert_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewAlert>,
) -> ApiResult<(StatusCode, Json<Alert>)> {
    let alert = state.service.create_alert(payload).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

// Forecasts

pub async fn list_forecasts_handler(State(state): State<AppState>) -> Json<Vec<Forecast>> {
    Json(state.service.list_forecasts())
}

pub async fn product_forecasts_handler(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Json<Vec<Forecast>> {
    let forecasts = parse_id(&product_id)
        .map(|id| state.service.forecasts_for_product(id))
        .unwrap_or_default();
    Json(forecasts)
}

pub async fn store_forecasts_handler(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Json<Vec<Forecast>> {
    let forecasts = parse_id(&store_id)
        .map(|id| state.service.forecasts_for_store(id))
        .unwrap_or_default();
    Json(forecasts)
}

pub async fn create_forecast_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewForecast>,
) -> ApiResult<(StatusCode, Json<Forecast>)> {
    let forecast = state.service.create_forecast(payload).await?;
    Ok((StatusCode::CREATED, Json(forecast)))
}

// Metric snapshots

/// Latest snapshot, serialized as `null` when none has been recorded
pub async fn latest_metric_handler(State(state): State<AppState>) -> Json<Option<Metric>> {
    Json(state.service.latest_metric())
}

pub async fn create_metric_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewMetric>,
) -> ApiResult<(StatusCode, Json<Metric>)> {
    let metric = state.service.create_metric(payload).await?;
    Ok((StatusCode::CREATED, Json(metric)))
}

// Dashboard analytics

pub async fn export_recommendations_handler(State(state): State<AppState>) -> impl IntoResponse {
    let csv = state.service.export_recommendations();
    let disposition = format!("attachment; filename=\"{}\"", RECOMMENDATIONS_CSV_FILENAME);

    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
}

pub async fn regional_insights_handler(State(state): State<AppState>) -> Json<RegionalInsights> {
    Json(state.service.regional_insights())
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn chatbot_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let response = state.service.chat(&request.message)?;
    info!("Answered chat message ({} chars)", request.message.len());
    Ok(Json(ChatResponse { response }))
}

pub async fn simulate_handler(
    State(state): State<AppState>,
    JsonBody(scenario): JsonBody<Scenario>,
) -> Json<SimulationResult> {
    debug!("Simulating scenario {:?}", scenario);
    Json(state.service.simulate(&scenario))
}
