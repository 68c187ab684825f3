//! Retail store locations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{EntityId, EntityKind, Record};

/// Demand bucket used to color the store heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DemandLevel {
    /// `high` and `very_high` both count as high demand
    pub fn is_high(&self) -> bool {
        matches!(self, DemandLevel::High | DemandLevel::VeryHigh)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::Low => "low",
            DemandLevel::Medium => "medium",
            DemandLevel::High => "high",
            DemandLevel::VeryHigh => "very_high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: EntityId,
    /// Business identifier, e.g. `STORE-001`
    pub store_id: String,
    pub name: String,
    pub city: String,
    pub region: String,
    pub demand_level: DemandLevel,
    pub created_at: DateTime<Utc>,
}

impl Store {
    pub fn from_new(id: EntityId, created_at: DateTime<Utc>, new: NewStore) -> Self {
        Self {
            id,
            store_id: new.store_id,
            name: new.name,
            city: new.city,
            region: new.region,
            demand_level: new.demand_level,
            created_at,
        }
    }
}

impl Record for Store {
    const KIND: EntityKind = EntityKind::Store;

    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    #[validate(length(min = 1, max = 256, message = "storeId must be 1-256 characters"))]
    pub store_id: String,
    #[validate(length(min = 1, max = 256, message = "name must be 1-256 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 256, message = "city must be 1-256 characters"))]
    pub city: String,
    #[validate(length(min = 1, max = 256, message = "region must be 1-256 characters"))]
    pub region: String,
    pub demand_level: DemandLevel,
}
