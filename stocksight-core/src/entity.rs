//! Identity shared by every entity kind

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier, unique within one entity kind
pub type EntityId = u64;

/// The five kinds of records held by the inventory store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Store,
    Alert,
    Forecast,
    Metric,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Product,
        EntityKind::Store,
        EntityKind::Alert,
        EntityKind::Forecast,
        EntityKind::Metric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Store => "store",
            EntityKind::Alert => "alert",
            EntityKind::Forecast => "forecast",
            EntityKind::Metric => "metric",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored row: something with a kind and a store-assigned id
pub trait Record: Clone {
    const KIND: EntityKind;

    fn id(&self) -> EntityId;
}
