//! Product records and their insert/patch shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::entity::{EntityId, EntityKind, Record};

/// Reorder urgency shown on the recommendations table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A stocked product with its demand forecast and reorder recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    /// Predicted demand over the next seven days
    pub predicted_demand: u32,
    pub recommended_reorder: u32,
    pub priority: Priority,
    pub days_until_stockout: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_new(id: EntityId, created_at: DateTime<Utc>, new: NewProduct) -> Self {
        Self {
            id,
            sku: new.sku,
            name: new.name,
            category: new.category,
            current_stock: new.current_stock,
            predicted_demand: new.predicted_demand,
            recommended_reorder: new.recommended_reorder,
            priority: new.priority,
            days_until_stockout: new.days_until_stockout,
            created_at,
        }
    }

    /// Stock on hand does not cover the predicted demand
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.predicted_demand
    }

    /// Merge the supplied fields over this record. Id and creation time never change.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(current_stock) = patch.current_stock {
            self.current_stock = current_stock;
        }
        if let Some(predicted_demand) = patch.predicted_demand {
            self.predicted_demand = predicted_demand;
        }
        if let Some(recommended_reorder) = patch.recommended_reorder {
            self.recommended_reorder = recommended_reorder;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(days) = patch.days_until_stockout {
            self.days_until_stockout = days;
        }
    }
}

impl Record for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Caller-supplied fields for a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, max = 256, message = "sku must be 1-256 characters"))]
    pub sku: String,
    #[validate(length(min = 1, max = 256, message = "name must be 1-256 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 256, message = "category must be 1-256 characters"))]
    pub category: String,
    pub current_stock: u32,
    pub predicted_demand: u32,
    pub recommended_reorder: u32,
    pub priority: Priority,
    #[serde(default)]
    pub days_until_stockout: Option<u32>,
}

/// Partial product update; absent fields keep their current value.
///
/// `null` also means "unchanged" for every field except `daysUntilStockout`,
/// where it clears the estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[validate(length(min = 1, max = 256, message = "sku must be 1-256 characters"))]
    pub sku: Option<String>,
    #[validate(length(min = 1, max = 256, message = "name must be 1-256 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 256, message = "category must be 1-256 characters"))]
    pub category: Option<String>,
    pub current_stock: Option<u32>,
    pub predicted_demand: Option<u32>,
    pub recommended_reorder: Option<u32>,
    pub priority: Option<Priority>,
    /// `None` when absent, `Some(None)` when sent as `null`
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_until_stockout: Option<Option<u32>>,
}

/// Deserialize a field that was present in the payload, keeping an explicit `null`
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> NewProduct {
        NewProduct {
            sku: "A1".to_string(),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            current_stock: 5,
            predicted_demand: 10,
            recommended_reorder: 12,
            priority: Priority::High,
            days_until_stockout: None,
        }
    }

    #[test]
    fn test_apply_patch_keeps_identity() {
        let created = Utc::now();
        let mut product = Product::from_new(7, created, widget());
        product.apply(ProductPatch {
            current_stock: Some(40),
            priority: Some(Priority::Low),
            ..Default::default()
        });

        assert_eq!(product.id, 7);
        assert_eq!(product.created_at, created);
        assert_eq!(product.current_stock, 40);
        assert_eq!(product.priority, Priority::Low);
        assert_eq!(product.sku, "A1");
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null_estimate() {
        let mut product = Product::from_new(
            1,
            Utc::now(),
            NewProduct {
                days_until_stockout: Some(3),
                ..widget()
            },
        );

        let untouched: ProductPatch = serde_json::from_value(json!({ "currentStock": 9 })).unwrap();
        assert_eq!(untouched.days_until_stockout, None);
        product.apply(untouched);
        assert_eq!(product.days_until_stockout, Some(3));

        let updated: ProductPatch =
            serde_json::from_value(json!({ "daysUntilStockout": 8 })).unwrap();
        product.apply(updated);
        assert_eq!(product.days_until_stockout, Some(8));

        let cleared: ProductPatch =
            serde_json::from_value(json!({ "daysUntilStockout": null })).unwrap();
        assert_eq!(cleared.days_until_stockout, Some(None));
        product.apply(cleared);
        assert_eq!(product.days_until_stockout, None);
        assert_eq!(product.current_stock, 9);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::from_new(1, Utc::now(), widget());
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["currentStock"], 5);
        assert_eq!(value["predictedDemand"], 10);
        assert_eq!(value["recommendedReorder"], 12);
        assert_eq!(value["priority"], "high");
        assert!(value["daysUntilStockout"].is_null());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_negative_stock_is_rejected_by_shape() {
        let result: Result<NewProduct, _> = serde_json::from_value(json!({
            "sku": "A1",
            "name": "Widget",
            "category": "Tools",
            "currentStock": -1,
            "predictedDemand": 10,
            "recommendedReorder": 12,
            "priority": "high"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_priority_is_rejected_by_shape() {
        let result: Result<NewProduct, _> = serde_json::from_value(json!({
            "sku": "A1",
            "name": "Widget",
            "category": "Tools",
            "currentStock": 1,
            "predictedDemand": 10,
            "recommendedReorder": 12,
            "priority": "urgent"
        }));
        assert!(result.is_err());
    }
}
