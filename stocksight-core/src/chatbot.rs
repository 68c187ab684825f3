//! Keyword-driven assistant replies.
//!
//! A message is classified into a [`ChatIntent`] by ordered keyword checks,
//! then a reply is rendered from the intent and a [`ChatSnapshot`] of current
//! aggregates. There is no conversation state.

use serde::{Deserialize, Serialize};

use crate::alert::{Alert, Severity};
use crate::insights;
use crate::metric::Metric;
use crate::product::Product;
use crate::store::Store;

/// Reply used when no keyword matches
pub const FALLBACK_REPLY: &str = "I can help you with that! Let me check our inventory data...";

/// Region named in store replies when no region has high-demand stores
const DEFAULT_HOT_REGION: &str = "West Coast";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    StockQuery,
    ForecastQuery,
    AlertQuery,
    SavingsQuery,
    StoreQuery,
    Unknown,
}

/// Keywords in priority order; the first one found in the message wins
const KEYWORDS: [(&str, ChatIntent); 5] = [
    ("stock", ChatIntent::StockQuery),
    ("forecast", ChatIntent::ForecastQuery),
    ("alert", ChatIntent::AlertQuery),
    ("savings", ChatIntent::SavingsQuery),
    ("stores", ChatIntent::StoreQuery),
];

impl ChatIntent {
    /// Classify a message by case-insensitive substring match
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| message.contains(keyword))
            .map(|(_, intent)| *intent)
            .unwrap_or(ChatIntent::Unknown)
    }
}

/// First product that cannot cover its predicted demand
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockItem {
    pub name: String,
    pub current_stock: u32,
}

/// Live aggregates the reply templates draw from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatSnapshot {
    pub low_stock_count: usize,
    pub first_low_stock: Option<LowStockItem>,
    pub forecast_accuracy: Option<String>,
    pub cost_savings: Option<String>,
    pub active_alerts: usize,
    pub high_alerts: usize,
    pub medium_alerts: usize,
    pub low_alerts: usize,
    pub store_count: usize,
    pub highest_demand_region: Option<String>,
}

impl ChatSnapshot {
    pub fn collect(
        products: &[Product],
        active_alerts: &[Alert],
        stores: &[Store],
        latest_metric: Option<&Metric>,
    ) -> Self {
        let low_stock: Vec<&Product> = products.iter().filter(|p| p.is_low_stock()).collect();
        let severity_count =
            |severity: Severity| active_alerts.iter().filter(|a| a.severity == severity).count();
        let regions = insights::region_stats(stores);

        Self {
            low_stock_count: low_stock.len(),
            first_low_stock: low_stock.first().map(|p| LowStockItem {
                name: p.name.clone(),
                current_stock: p.current_stock,
            }),
            forecast_accuracy: latest_metric.map(|m| m.forecast_accuracy.clone()),
            cost_savings: latest_metric.map(|m| m.cost_savings.clone()),
            active_alerts: active_alerts.len(),
            high_alerts: severity_count(Severity::High),
            medium_alerts: severity_count(Severity::Medium),
            low_alerts: severity_count(Severity::Low),
            store_count: stores.len(),
            highest_demand_region: insights::highest_demand_region(&regions)
                .map(|stats| stats.region.clone()),
        }
    }
}

/// Render the reply for an intent
pub fn respond(intent: ChatIntent, snapshot: &ChatSnapshot) -> String {
    match intent {
        ChatIntent::StockQuery => match &snapshot.first_low_stock {
            Some(item) => format!(
                "I found {} products with low stock levels. {} needs immediate attention with only {} units remaining.",
                snapshot.low_stock_count, item.name, item.current_stock
            ),
            None => "I found 0 products with low stock levels. Every product currently covers its predicted demand.".to_string(),
        },
        ChatIntent::ForecastQuery => match &snapshot.forecast_accuracy {
            Some(accuracy) => format!(
                "Our AI forecast shows {}% accuracy. Based on current trends, we expect demand to increase by 15% in the electronics category next week.",
                accuracy
            ),
            None => "No forecast accuracy snapshot is available yet.".to_string(),
        },
        ChatIntent::AlertQuery => format!(
            "There are {} active alerts: {} high priority, {} medium priority, and {} low priority notifications.",
            snapshot.active_alerts, snapshot.high_alerts, snapshot.medium_alerts, snapshot.low_alerts
        ),
        ChatIntent::SavingsQuery => match &snapshot.cost_savings {
            Some(savings) => format!(
                "Our smart inventory system has saved ${} this quarter through optimized stock management and reduced waste.",
                savings
            ),
            None => "No cost savings snapshot is available yet.".to_string(),
        },
        ChatIntent::StoreQuery => format!(
            "We currently monitor {} stores across different regions. The highest demand is in our {} locations.",
            snapshot.store_count,
            snapshot
                .highest_demand_region
                .as_deref()
                .unwrap_or(DEFAULT_HOT_REGION)
        ),
        ChatIntent::Unknown => FALLBACK_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(ChatIntent::classify("What's my stock status?"), ChatIntent::StockQuery);
        assert_eq!(
            ChatIntent::classify("Any ALERT about the stock forecast?"),
            ChatIntent::StockQuery
        );
        assert_eq!(ChatIntent::classify("Show the forecast alerts"), ChatIntent::ForecastQuery);
        assert_eq!(ChatIntent::classify("alerts and savings"), ChatIntent::AlertQuery);
        assert_eq!(ChatIntent::classify("How much Savings?"), ChatIntent::SavingsQuery);
        assert_eq!(ChatIntent::classify("List our stores"), ChatIntent::StoreQuery);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(ChatIntent::classify("hello there"), ChatIntent::Unknown);
        assert_eq!(ChatIntent::classify(""), ChatIntent::Unknown);
        // singular "store" is not a keyword
        assert_eq!(ChatIntent::classify("which store is busiest"), ChatIntent::Unknown);
    }

    #[test]
    fn test_stock_reply() {
        let snapshot = ChatSnapshot {
            low_stock_count: 3,
            first_low_stock: Some(LowStockItem {
                name: "iPhone 15 Pro 256GB".to_string(),
                current_stock: 23,
            }),
            ..Default::default()
        };
        assert_eq!(
            respond(ChatIntent::StockQuery, &snapshot),
            "I found 3 products with low stock levels. iPhone 15 Pro 256GB needs immediate attention with only 23 units remaining."
        );
    }

    #[test]
    fn test_alert_reply_counts() {
        let snapshot = ChatSnapshot {
            active_alerts: 3,
            high_alerts: 1,
            medium_alerts: 1,
            low_alerts: 1,
            ..Default::default()
        };
        assert_eq!(
            respond(ChatIntent::AlertQuery, &snapshot),
            "There are 3 active alerts: 1 high priority, 1 medium priority, and 1 low priority notifications."
        );
    }

    #[test]
    fn test_replies_without_metric_snapshot() {
        let snapshot = ChatSnapshot::default();
        assert!(respond(ChatIntent::ForecastQuery, &snapshot).starts_with("No forecast accuracy"));
        assert!(respond(ChatIntent::SavingsQuery, &snapshot).starts_with("No cost savings"));
        assert!(respond(ChatIntent::StockQuery, &snapshot).starts_with("I found 0 products"));
        assert!(respond(ChatIntent::StoreQuery, &snapshot).contains("West Coast"));
        assert_eq!(respond(ChatIntent::Unknown, &snapshot), FALLBACK_REPLY);
    }

    #[test]
    fn test_savings_and_forecast_replies() {
        let snapshot = ChatSnapshot {
            forecast_accuracy: Some("94.2".to_string()),
            cost_savings: Some("2800000".to_string()),
            ..Default::default()
        };
        assert!(respond(ChatIntent::ForecastQuery, &snapshot).starts_with("Our AI forecast shows 94.2% accuracy."));
        assert!(respond(ChatIntent::SavingsQuery, &snapshot).contains("saved $2800000 this quarter"));
    }
}
