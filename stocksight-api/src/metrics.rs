//! Prometheus metrics for the API service
//!
//! Each [`HttpMetrics`] owns its own registry, so several routers can live
//! in one process (as they do in tests) without name clashes.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use stocksight_core::{EntityKind, InventoryError, InventoryResult};

#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration: HistogramVec,
    entities: IntGaugeVec,
}

impl HttpMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "stocksight_http_requests_total",
                "Total number of HTTP requests handled",
            ),
            &["method", "route", "status"],
        )?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "stocksight_http_request_duration_seconds",
                "HTTP request processing duration",
            ),
            &["route"],
        )?;

        let entities = IntGaugeVec::new(
            Opts::new("stocksight_entities", "Number of stored entities by kind"),
            &["kind"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;
        registry.register(Box::new(entities.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
            entities,
        })
    }

    /// Record a completed request
    pub fn record_request(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        self.requests_total
            .with_label_values(&[method, route, &status.to_string()])
            .inc();
        self.request_duration
            .with_label_values(&[route])
            .observe(elapsed.as_secs_f64());
    }

    pub fn set_entity_counts(&self, counts: &[(EntityKind, usize)]) {
        for (kind, count) in counts {
            self.entities
                .with_label_values(&[kind.as_str()])
                .set(*count as i64);
        }
    }

    /// Render every registered metric in the Prometheus text format
    pub fn render(&self) -> InventoryResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|err| InventoryError::internal(format!("metrics encoding failed: {}", err)))?;

        String::from_utf8(buffer)
            .map_err(|err| InventoryError::internal(format!("metrics are not UTF-8: {}", err)))
    }
}

/// Middleware recording request counts and latency per matched route
pub async fn track_requests(
    State(metrics): State<Arc<HttpMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;

    metrics.record_request(&method, &route, response.status().as_u16(), start.elapsed());
    response
}
