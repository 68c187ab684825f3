//! Per product/store demand forecasts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{EntityId, EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub id: EntityId,
    pub product_id: Option<EntityId>,
    pub store_id: Option<EntityId>,
    pub date: DateTime<Utc>,
    pub predicted_demand: u32,
    pub actual_demand: Option<u32>,
    /// Decimal percentage, 0-100
    pub accuracy: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Forecast {
    pub fn from_new(id: EntityId, created_at: DateTime<Utc>, new: NewForecast) -> Self {
        Self {
            id,
            product_id: new.product_id,
            store_id: new.store_id,
            date: new.date,
            predicted_demand: new.predicted_demand,
            actual_demand: new.actual_demand,
            accuracy: new.accuracy,
            created_at,
        }
    }
}

impl Record for Forecast {
    const KIND: EntityKind = EntityKind::Forecast;

    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewForecast {
    #[serde(default)]
    pub product_id: Option<EntityId>,
    #[serde(default)]
    pub store_id: Option<EntityId>,
    pub date: DateTime<Utc>,
    pub predicted_demand: u32,
    #[serde(default)]
    pub actual_demand: Option<u32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 16, message = "accuracy must be a decimal string"))]
    pub accuracy: Option<String>,
}
