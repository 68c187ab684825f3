//! Regional demand aggregation behind the store heatmap

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::store::{DemandLevel, Store};

/// Region reported as the growth opportunity when no region qualifies
pub const DEFAULT_GROWTH_REGION: &str = "Northeast";

/// Store counts for one region, bucketed by demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    pub region: String,
    pub total: usize,
    /// `high` and `very_high` stores
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RegionStats {
    fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            total: 0,
            high: 0,
            medium: 0,
            low: 0,
        }
    }

    fn record(&mut self, level: DemandLevel) {
        self.total += 1;
        match level {
            DemandLevel::High | DemandLevel::VeryHigh => self.high += 1,
            DemandLevel::Medium => self.medium += 1,
            DemandLevel::Low => self.low += 1,
        }
    }

    /// Share of high-demand stores in this region
    pub fn high_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.high as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalInsights {
    /// Regions in the order they were first encountered
    pub regions: Vec<RegionStats>,
    /// `None` when no region has a single high-demand store
    pub highest_demand_region: Option<String>,
    pub growth_opportunity_region: String,
    /// Number of `very_high` stores
    pub redistribution_needed: usize,
}

/// Group stores by region, keeping first-encountered order
pub fn region_stats(stores: &[Store]) -> Vec<RegionStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut regions: Vec<RegionStats> = Vec::new();

    for store in stores {
        let idx = *index.entry(store.region.as_str()).or_insert_with(|| {
            regions.push(RegionStats::new(&store.region));
            regions.len() - 1
        });
        regions[idx].record(store.demand_level);
    }

    regions
}

/// Region with the greatest high-demand ratio; ties go to the earlier region
pub fn highest_demand_region(regions: &[RegionStats]) -> Option<&RegionStats> {
    let mut best: Option<&RegionStats> = None;
    let mut best_ratio = 0.0;

    for stats in regions {
        let ratio = stats.high_ratio();
        if ratio > best_ratio {
            best_ratio = ratio;
            best = Some(stats);
        }
    }

    best
}

/// First region with more low-demand than high-demand stores
pub fn growth_opportunity_region(regions: &[RegionStats]) -> Option<&RegionStats> {
    regions.iter().find(|stats| stats.low > stats.high)
}

pub fn regional_insights(stores: &[Store]) -> RegionalInsights {
    let regions = region_stats(stores);
    let highest = highest_demand_region(&regions).map(|stats| stats.region.clone());
    let growth = growth_opportunity_region(&regions)
        .map(|stats| stats.region.clone())
        .unwrap_or_else(|| DEFAULT_GROWTH_REGION.to_string());
    let redistribution_needed = stores
        .iter()
        .filter(|store| store.demand_level == DemandLevel::VeryHigh)
        .count();

    RegionalInsights {
        regions,
        highest_demand_region: highest,
        growth_opportunity_region: growth,
        redistribution_needed,
    }
}
