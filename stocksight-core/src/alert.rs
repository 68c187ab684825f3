//! Inventory alerts surfaced on the dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{EntityId, EntityKind, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Stockout,
    Overstock,
    Optimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Not checked against the product table
    pub product_id: Option<EntityId>,
    /// Not checked against the store table
    pub store_id: Option<EntityId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn from_new(id: EntityId, created_at: DateTime<Utc>, new: NewAlert) -> Self {
        Self {
            id,
            kind: new.kind,
            title: new.title,
            message: new.message,
            severity: new.severity,
            product_id: new.product_id,
            store_id: new.store_id,
            is_active: new.is_active,
            created_at,
        }
    }
}

impl Record for Alert {
    const KIND: EntityKind = EntityKind::Alert;

    fn id(&self) -> EntityId {
        self.id
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    #[validate(length(min = 1, max = 256, message = "title must be 1-256 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 256, message = "message must be 1-256 characters"))]
    pub message: String,
    pub severity: Severity,
    #[serde(default)]
    pub product_id: Option<EntityId>,
    #[serde(default)]
    pub store_id: Option<EntityId>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}
