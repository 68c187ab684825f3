use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use stocksight_core::ValidationLimits;

/// Environment variable naming a YAML config file
pub const CONFIG_PATH_ENV: &str = "STOCKSIGHT_CONFIG_PATH";

/// Configuration for the inventory API service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to
    pub bind_address: String,

    /// Load the demo catalogue at startup
    pub seed_mock_data: bool,

    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Payload validation settings
    pub validation: ValidationConfig,

    /// Metrics and monitoring configuration
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of `sku` and `storeId`
    pub max_sku_length: usize,
}

/// Metrics and monitoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Enable Prometheus metrics endpoint
    pub enable_prometheus: bool,

    /// Metrics endpoint path
    pub metrics_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            seed_mock_data: true,
            log_filter: "info".to_string(),
            validation: ValidationConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_sku_length: stocksight_core::DEFAULT_MAX_IDENTIFIER_LENGTH,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enable_prometheus: true,
            metrics_path: "/metrics".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from an optional config file, then environment variables
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load_from_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a YAML file; missing keys keep their defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply `STOCKSIGHT_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind_addr) = lookup("STOCKSIGHT_BIND_ADDRESS") {
            self.bind_address = bind_addr;
        }

        if let Some(seed) = lookup("STOCKSIGHT_SEED_MOCK_DATA") {
            self.seed_mock_data = seed
                .parse()
                .with_context(|| format!("Invalid STOCKSIGHT_SEED_MOCK_DATA: {}", seed))?;
        }

        if let Some(filter) = lookup("STOCKSIGHT_LOG_FILTER") {
            self.log_filter = filter;
        }

        if let Some(max_len) = lookup("STOCKSIGHT_MAX_SKU_LENGTH") {
            self.validation.max_sku_length = max_len
                .parse()
                .with_context(|| format!("Invalid STOCKSIGHT_MAX_SKU_LENGTH: {}", max_len))?;
        }

        if let Some(enable) = lookup("STOCKSIGHT_ENABLE_PROMETHEUS") {
            self.metrics.enable_prometheus = enable
                .parse()
                .with_context(|| format!("Invalid STOCKSIGHT_ENABLE_PROMETHEUS: {}", enable))?;
        }

        if let Some(path) = lookup("STOCKSIGHT_METRICS_PATH") {
            self.metrics.metrics_path = path;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(anyhow::anyhow!("Bind address cannot be empty"));
        }

        if self.validation.max_sku_length == 0 {
            return Err(anyhow::anyhow!("Max sku length must be greater than 0"));
        }

        if !self.metrics.metrics_path.starts_with('/') {
            return Err(anyhow::anyhow!(
                "Metrics path must start with '/': {}",
                self.metrics.metrics_path
            ));
        }

        if self.metrics.enable_prometheus {
            validate_metrics_path(&self.metrics.metrics_path)?;
        }

        Ok(())
    }

    pub fn validation_limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_identifier_length: self.validation.max_sku_length,
            ..ValidationLimits::default()
        }
    }
}

/// The metrics route is registered next to the fixed routes, so it must be a
/// literal path that none of them already claim.
fn validate_metrics_path(path: &str) -> Result<()> {
    if path.contains(':') || path.contains('*') {
        return Err(anyhow::anyhow!(
            "Metrics path must be a literal path, not a route pattern: {}",
            path
        ));
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "/health" || trimmed == "/api" || path.starts_with("/api/")
    {
        return Err(anyhow::anyhow!(
            "Metrics path collides with a service route: {}",
            path
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert!(config.seed_mock_data);
        assert_eq!(config.validation.max_sku_length, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ApiConfig::default();
        config
            .apply_overrides(lookup(&[
                ("STOCKSIGHT_BIND_ADDRESS", "127.0.0.1:8080"),
                ("STOCKSIGHT_SEED_MOCK_DATA", "false"),
                ("STOCKSIGHT_MAX_SKU_LENGTH", "12"),
                ("STOCKSIGHT_METRICS_PATH", "/prom"),
            ]))
            .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert!(!config.seed_mock_data);
        assert_eq!(config.validation_limits().max_identifier_length, 12);
        assert_eq!(config.metrics.metrics_path, "/prom");
        assert!(config.metrics.enable_prometheus);
    }

    #[test]
    fn test_unparseable_override_is_an_error() {
        let mut config = ApiConfig::default();
        let result = config.apply_overrides(lookup(&[("STOCKSIGHT_SEED_MOCK_DATA", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ApiConfig = serde_yaml::from_str(
            "bind_address: \"127.0.0.1:9000\"\nmetrics:\n  enable_prometheus: false\n",
        )
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert!(!config.metrics.enable_prometheus);
        assert_eq!(config.metrics.metrics_path, "/metrics");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_validation_failures() {
        let mut config = ApiConfig::default();
        config.validation.max_sku_length = 0;
        assert!(config.validate().is_err());

        let mut config = ApiConfig::default();
        config.metrics.metrics_path = "metrics".to_string();
        assert!(config.validate().is_err());

        let mut config = ApiConfig::default();
        config.bind_address = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_metrics_path_must_not_shadow_service_routes() {
        for path in ["/health", "/api", "/api/products", "/api/metrics", "/", "/stats/:id"] {
            let mut config = ApiConfig::default();
            config.metrics.metrics_path = path.to_string();
            let err = config.validate().unwrap_err();
            assert!(
                err.to_string().contains("Metrics path"),
                "path {} gave {}",
                path,
                err
            );
        }

        let mut config = ApiConfig::default();
        config.metrics.metrics_path = "/internal/prometheus".to_string();
        assert!(config.validate().is_ok());

        // Nothing is registered when the endpoint is off
        let mut config = ApiConfig::default();
        config.metrics.enable_prometheus = false;
        config.metrics.metrics_path = "/health".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ApiConfig::load_from_file("/nonexistent/stocksight.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
