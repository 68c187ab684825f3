//! System-wide KPI snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{EntityId, EntityKind, Record};

/// One snapshot of the headline dashboard numbers.
///
/// The monetary and percentage fields are kept as the decimal strings the
/// client sent so they render exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: EntityId,
    pub total_products: u64,
    pub total_stores: u64,
    pub cost_savings: String,
    pub forecast_accuracy: String,
    /// Assigned by the store when the snapshot is inserted
    pub date: DateTime<Utc>,
}

impl Metric {
    pub fn from_new(id: EntityId, date: DateTime<Utc>, new: NewMetric) -> Self {
        Self {
            id,
            total_products: new.total_products,
            total_stores: new.total_stores,
            cost_savings: new.cost_savings,
            forecast_accuracy: new.forecast_accuracy,
            date,
        }
    }
}

impl Record for Metric {
    const KIND: EntityKind = EntityKind::Metric;

    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMetric {
    pub total_products: u64,
    pub total_stores: u64,
    #[validate(length(min = 1, max = 32, message = "costSavings must be a decimal string"))]
    pub cost_savings: String,
    #[validate(length(min = 1, max = 16, message = "forecastAccuracy must be a decimal string"))]
    pub forecast_accuracy: String,
}
