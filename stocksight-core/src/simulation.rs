//! What-if scenario simulator.
//!
//! Scales a fixed baseline by a promotion factor and an external-factor
//! multiplier. No model is involved.

use serde::{Deserialize, Serialize};

const BASE_DEMAND_CHANGE_PERCENT: f64 = 15.0;
const BASE_INVENTORY_TURNOVER: f64 = 2.1;
const BASE_REVENUE_IMPACT: f64 = 125_000.0;

/// Share of the demand change recommended as extra inventory
const STOCK_UP_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Home,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
            ProductCategory::Home => "home",
        }
    }

    fn focus_advice(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Focus on smartphones and tablets for maximum impact",
            ProductCategory::Clothing => "Prioritize seasonal apparel and accessories",
            ProductCategory::Home => "Stock up on home improvement and gardening supplies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Promotion {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "10off")]
    TenPercentOff,
    #[serde(rename = "20off")]
    TwentyPercentOff,
    #[serde(rename = "blackfriday")]
    BlackFriday,
    #[serde(rename = "backtoschool")]
    BackToSchool,
}

impl Promotion {
    pub fn multiplier(&self) -> f64 {
        match self {
            Promotion::None => 1.0,
            Promotion::TenPercentOff => 1.5,
            Promotion::TwentyPercentOff => 2.0,
            Promotion::BlackFriday => 3.0,
            Promotion::BackToSchool => 1.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalFactor {
    #[default]
    Normal,
    Holiday,
    Extreme,
    Downturn,
    Sports,
}

impl ExternalFactor {
    pub fn multiplier(&self) -> f64 {
        match self {
            ExternalFactor::Normal => 1.0,
            ExternalFactor::Holiday => 1.2,
            ExternalFactor::Extreme => 0.7,
            ExternalFactor::Downturn => 0.6,
            ExternalFactor::Sports => 1.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub category: ProductCategory,
    #[serde(default)]
    pub promotion: Promotion,
    #[serde(default)]
    pub external_factor: ExternalFactor,
}

impl Scenario {
    pub fn multiplier(&self) -> f64 {
        self.promotion.multiplier() * self.external_factor.multiplier()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Expected demand change in percent
    pub demand_change: i64,
    /// Turnover rendered with one decimal place
    pub inventory_turnover: String,
    pub revenue_impact: i64,
    pub recommendations: Vec<String>,
}

pub fn simulate(scenario: &Scenario) -> SimulationResult {
    let multiplier = scenario.multiplier();

    let demand_change = (BASE_DEMAND_CHANGE_PERCENT * multiplier).round() as i64;
    let inventory_turnover = format!("{:.1}", BASE_INVENTORY_TURNOVER * multiplier);
    let revenue_impact = (BASE_REVENUE_IMPACT * multiplier).round() as i64;

    let recommendations = vec![
        format!(
            "Increase {} inventory by {}% before promotion",
            scenario.category.as_str(),
            (demand_change as f64 * STOCK_UP_RATIO).round() as i64
        ),
        scenario.category.focus_advice().to_string(),
        format!(
            "Prepare for {}-day stockout recovery period",
            (demand_change as f64 / 10.0).ceil() as i64
        ),
    ];

    SimulationResult {
        demand_change,
        inventory_turnover,
        revenue_impact,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_baseline_scenario() {
        let result = simulate(&Scenario {
            category: ProductCategory::Clothing,
            promotion: Promotion::None,
            external_factor: ExternalFactor::Normal,
        });

        assert_eq!(result.demand_change, 15);
        assert_eq!(result.inventory_turnover, "2.1");
        assert_eq!(result.revenue_impact, 125_000);
        assert_eq!(
            result.recommendations,
            vec![
                "Increase clothing inventory by 12% before promotion",
                "Prioritize seasonal apparel and accessories",
                "Prepare for 2-day stockout recovery period",
            ]
        );
    }

    #[test]
    fn test_black_friday_holiday() {
        let result = simulate(&Scenario {
            category: ProductCategory::Electronics,
            promotion: Promotion::BlackFriday,
            external_factor: ExternalFactor::Holiday,
        });

        assert_eq!(result.demand_change, 54);
        assert_eq!(result.inventory_turnover, "7.6");
        assert_eq!(result.revenue_impact, 450_000);
        assert_eq!(result.recommendations[0], "Increase electronics inventory by 43% before promotion");
        assert_eq!(result.recommendations[1], "Focus on smartphones and tablets for maximum impact");
        assert_eq!(result.recommendations[2], "Prepare for 6-day stockout recovery period");
    }

    #[test]
    fn test_downturn_shrinks_results() {
        let result = simulate(&Scenario {
            category: ProductCategory::Home,
            promotion: Promotion::TwentyPercentOff,
            external_factor: ExternalFactor::Downturn,
        });

        // 2.0 * 0.6
        assert_eq!(result.demand_change, 18);
        assert_eq!(result.revenue_impact, 150_000);
        assert_eq!(result.recommendations[1], "Stock up on home improvement and gardening supplies");
    }

    #[test]
    fn test_scenario_wire_format() {
        let scenario: Scenario = serde_json::from_value(json!({
            "category": "home",
            "promotion": "10off",
            "externalFactor": "sports"
        }))
        .unwrap();
        assert_eq!(scenario.promotion, Promotion::TenPercentOff);
        assert_eq!(scenario.external_factor, ExternalFactor::Sports);

        let defaulted: Scenario = serde_json::from_value(json!({ "category": "clothing" })).unwrap();
        assert_eq!(defaulted.multiplier(), 1.0);
    }
}
