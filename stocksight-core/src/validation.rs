//! Validation for caller-supplied records
//!
//! Shape constraints that serde can express (types, enumerations,
//! non-negative counts) are enforced while deserializing. Length rules live on
//! the insert types as `validator` attributes. Everything else, such as
//! decimal strings and identifier rules, is checked here.

use validator::Validate;

use crate::alert::NewAlert;
use crate::error::{InventoryError, InventoryResult};
use crate::forecast::NewForecast;
use crate::metric::NewMetric;
use crate::product::{NewProduct, ProductPatch};
use crate::store::NewStore;

/// Validation limits and constants
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    /// Maximum length of a business identifier (`sku`, `storeId`)
    pub max_identifier_length: usize,
    /// Upper bound for percentage fields (`accuracy`, `forecastAccuracy`)
    pub max_percentage: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_identifier_length: crate::DEFAULT_MAX_IDENTIFIER_LENGTH,
            max_percentage: 100.0,
        }
    }
}

/// Validator for insert and patch payloads
/// `(precision, scale)` of money amounts such as `costSavings`
pub const MONEY_PRECISION: (usize, usize) = (12, 2);

/// `(precision, scale)` of percentages such as `accuracy`
pub const PERCENTAGE_PRECISION: (usize, usize) = (5, 2);

#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    /// Create a new validator with custom limits
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn validate_new_product(&self, product: &NewProduct) -> InventoryResult<()> {
        product.validate()?;
        self.validate_identifier("sku", &product.sku)
    }

    pub fn validate_product_patch(&self, patch: &ProductPatch) -> InventoryResult<()> {
        patch.validate()?;
        if let Some(sku) = &patch.sku {
            self.validate_identifier("sku", sku)?;
        }
        Ok(())
    }

    pub fn validate_new_store(&self, store: &NewStore) -> InventoryResult<()> {
        store.validate()?;
        self.validate_identifier("storeId", &store.store_id)
    }

    pub fn validate_new_alert(&self, alert: &NewAlert) -> InventoryResult<()> {
        alert.validate()?;
        Ok(())
    }

    pub fn validate_new_forecast(&self, forecast: &NewForecast) -> InventoryResult<()> {
        forecast.validate()?;
        if let Some(accuracy) = &forecast.accuracy {
            self.validate_percentage("accuracy", accuracy)?;
            Self::validate_precision("accuracy", accuracy, PERCENTAGE_PRECISION)?;
        }
        Ok(())
    }

    pub fn validate_new_metric(&self, metric: &NewMetric) -> InventoryResult<()> {
        metric.validate()?;
        self.validate_decimal("costSavings", &metric.cost_savings)?;
        Self::validate_precision("costSavings", &metric.cost_savings, MONEY_PRECISION)?;
        self.validate_percentage("forecastAccuracy", &metric.forecast_accuracy)?;
        Self::validate_precision(
            "forecastAccuracy",
            &metric.forecast_accuracy,
            PERCENTAGE_PRECISION,
        )
    }

    /// Validate a business identifier such as a SKU
    pub fn validate_identifier(&self, field: &str, value: &str) -> InventoryResult<()> {
        if value.trim().is_empty() {
            return Err(InventoryError::validation(format!(
                "{} cannot be empty",
                field
            )));
        }

        if value.len() > self.limits.max_identifier_length {
            return Err(InventoryError::validation(format!(
                "{} too long: {} > {}",
                field,
                value.len(),
                self.limits.max_identifier_length
            )));
        }

        if value.trim() != value {
            return Err(InventoryError::validation(format!(
                "{} cannot start or end with whitespace",
                field
            )));
        }

        if value.chars().any(|c| c.is_control()) {
            return Err(InventoryError::validation(format!(
                "{} contains invalid control characters",
                field
            )));
        }

        Ok(())
    }

    /// Validate a non-negative decimal string like `2800000` or `94.2`
    pub fn validate_decimal(&self, field: &str, value: &str) -> InventoryResult<f64> {
        if !Self::is_valid_decimal(value) {
            return Err(InventoryError::validation(format!(
                "{} must be a non-negative decimal, got '{}'",
                field, value
            )));
        }

        value
            .parse::<f64>()
            .map_err(|e| InventoryError::validation(format!("{}: {}", field, e)))
    }

    /// Validate a decimal string in `0..=max_percentage`
    pub fn validate_percentage(&self, field: &str, value: &str) -> InventoryResult<()> {
        let parsed = self.validate_decimal(field, value)?;
        if parsed > self.limits.max_percentage {
            return Err(InventoryError::validation(format!(
                "{} out of range: {} > {}",
                field, value, self.limits.max_percentage
            )));
        }
        Ok(())
    }

    /// Check digit counts of a decimal string against `(precision, scale)`:
    /// at most `scale` fraction digits and `precision - scale` integer digits,
    /// ignoring leading zeros.
    pub fn validate_precision(
        field: &str,
        value: &str,
        (precision, scale): (usize, usize),
    ) -> InventoryResult<()> {
        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        let integer_digits = whole.trim_start_matches('0').len();

        if fraction.len() > scale || integer_digits > precision - scale {
            return Err(InventoryError::validation(format!(
                "{} exceeds decimal({}, {}): '{}'",
                field, precision, scale, value
            )));
        }
        Ok(())
    }

    /// Quick check: digits with at most one decimal point and digits on both sides
    pub fn is_valid_decimal(value: &str) -> bool {
        let mut parts = value.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

        match parts.next() {
            Some(fraction) => all_digits(whole) && all_digits(fraction),
            None => all_digits(whole),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertKind, Severity};
    use crate::product::Priority;
    use crate::store::DemandLevel;

    fn product(sku: &str) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            name: "Nike Air Max 270".to_string(),
            category: "Clothing".to_string(),
            current_stock: 156,
            predicted_demand: 89,
            recommended_reorder: 100,
            priority: Priority::Low,
            days_until_stockout: Some(14),
        }
    }

    fn metric(savings: &str, accuracy: &str) -> NewMetric {
        NewMetric {
            total_products: 15234,
            total_stores: 1847,
            cost_savings: savings.to_string(),
            forecast_accuracy: accuracy.to_string(),
        }
    }

    #[test]
    fn test_product_validation() {
        let validator = Validator::default();

        assert!(validator.validate_new_product(&product("SKU-003456")).is_ok());
        assert!(validator.validate_new_product(&product("")).is_err());
        assert!(validator.validate_new_product(&product(" SKU-1")).is_err());
        assert!(validator.validate_new_product(&product("SKU\n1")).is_err());

        let mut unnamed = product("SKU-1");
        unnamed.name.clear();
        let err = validator.validate_new_product(&unnamed).unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_identifier_length_limit() {
        let validator = Validator::new(ValidationLimits {
            max_identifier_length: 8,
            ..Default::default()
        });

        assert!(validator.validate_new_product(&product("SKU-0001")).is_ok());
        assert!(validator.validate_new_product(&product("SKU-00001")).is_err());
    }

    #[test]
    fn test_patch_validation_only_checks_present_fields() {
        let validator = Validator::default();

        assert!(validator.validate_product_patch(&ProductPatch::default()).is_ok());
        assert!(validator
            .validate_product_patch(&ProductPatch {
                sku: Some(String::new()),
                ..Default::default()
            })
            .is_err());
    }

    #[test]
    fn test_store_and_alert_validation() {
        let validator = Validator::default();

        let store = NewStore {
            store_id: "STORE-009".to_string(),
            name: "WalCart Austin".to_string(),
            city: "Austin".to_string(),
            region: String::new(),
            demand_level: DemandLevel::Low,
        };
        assert!(validator.validate_new_store(&store).is_err());

        let alert = NewAlert {
            kind: AlertKind::Optimal,
            title: "Optimal Stock Level".to_string(),
            message: "Balanced".to_string(),
            severity: Severity::Low,
            product_id: None,
            store_id: None,
            is_active: true,
        };
        assert!(validator.validate_new_alert(&alert).is_ok());
    }

    #[test]
    fn test_metric_decimal_strings() {
        let validator = Validator::default();

        assert!(validator.validate_new_metric(&metric("2800000", "94.2")).is_ok());
        assert!(validator.validate_new_metric(&metric("2.8M", "94.2")).is_err());
        assert!(validator.validate_new_metric(&metric("-5", "94.2")).is_err());
        assert!(validator.validate_new_metric(&metric("100", "100.01")).is_err());
        assert!(validator.validate_new_metric(&metric("100", "100")).is_ok());
    }

    #[test]
    fn test_decimal_precision_and_scale() {
        let validator = Validator::default();

        assert!(validator.validate_new_metric(&metric("9999999999.99", "94.25")).is_ok());
        assert!(validator.validate_new_metric(&metric("0009999999999", "94.2")).is_ok());
        assert!(validator.validate_new_metric(&metric("1.23456", "94.2")).is_err());
        assert!(validator.validate_new_metric(&metric("10000000000", "94.2")).is_err());
        assert!(validator
            .validate_new_metric(&metric(&"9".repeat(30), "94.2"))
            .is_err());
        assert!(validator.validate_new_metric(&metric("100", "94.255")).is_err());

        assert!(Validator::validate_precision("accuracy", "100.00", PERCENTAGE_PRECISION).is_ok());
        assert!(Validator::validate_precision("accuracy", "91.125", PERCENTAGE_PRECISION).is_err());
    }

    #[test]
    fn test_quick_decimal_check() {
        assert!(Validator::is_valid_decimal("0"));
        assert!(Validator::is_valid_decimal("94.20"));
        assert!(!Validator::is_valid_decimal(""));
        assert!(!Validator::is_valid_decimal("1."));
        assert!(!Validator::is_valid_decimal(".5"));
        assert!(!Validator::is_valid_decimal("1.2.3"));
        assert!(!Validator::is_valid_decimal("NaN"));
    }
}
