//! Fixed mock records loaded at startup

use tracing::info;

use crate::alert::{AlertKind, NewAlert, Severity};
use crate::datastore::InventoryStore;
use crate::metric::NewMetric;
use crate::product::{NewProduct, Priority};
use crate::store::{DemandLevel, NewStore};

#[allow(clippy::too_many_arguments)]
fn product(
    sku: &str,
    name: &str,
    category: &str,
    current_stock: u32,
    predicted_demand: u32,
    recommended_reorder: u32,
    priority: Priority,
    days_until_stockout: u32,
) -> NewProduct {
    NewProduct {
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        current_stock,
        predicted_demand,
        recommended_reorder,
        priority,
        days_until_stockout: Some(days_until_stockout),
    }
}

fn store(store_id: &str, name: &str, city: &str, region: &str, demand_level: DemandLevel) -> NewStore {
    NewStore {
        store_id: store_id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        demand_level,
    }
}

pub fn mock_products() -> Vec<NewProduct> {
    vec![
        product("SKU-001847", "iPhone 15 Pro 256GB", "Electronics", 23, 45, 50, Priority::High, 2),
        product("SKU-002193", "Samsung 65\" QLED TV", "Electronics", 8, 12, 15, Priority::Medium, 5),
        product("SKU-003456", "Nike Air Max 270", "Clothing", 156, 89, 100, Priority::Low, 14),
        product("SKU-004789", "Dyson V15 Vacuum", "Home & Garden", 34, 67, 75, Priority::High, 3),
    ]
}

pub fn mock_stores() -> Vec<NewStore> {
    vec![
        store("STORE-001", "WalCart NYC", "New York", "Northeast", DemandLevel::High),
        store("STORE-002", "WalCart LA", "Los Angeles", "West", DemandLevel::VeryHigh),
        store("STORE-003", "WalCart Chicago", "Chicago", "Midwest", DemandLevel::Medium),
        store("STORE-004", "WalCart Houston", "Houston", "South", DemandLevel::High),
        store("STORE-005", "WalCart Phoenix", "Phoenix", "West", DemandLevel::Medium),
        store("STORE-006", "WalCart Philadelphia", "Philadelphia", "Northeast", DemandLevel::Medium),
        store("STORE-007", "WalCart San Antonio", "San Antonio", "South", DemandLevel::Medium),
        store("STORE-008", "WalCart Dallas", "Dallas", "South", DemandLevel::High),
    ]
}

pub fn mock_alerts() -> Vec<NewAlert> {
    vec![
        NewAlert {
            kind: AlertKind::Stockout,
            title: "Stockout Alert".to_string(),
            message: "iPhone 15 Pro expected stockout at Store #2847 in 2 days".to_string(),
            severity: Severity::High,
            product_id: Some(1),
            store_id: Some(1),
            is_active: true,
        },
        NewAlert {
            kind: AlertKind::Overstock,
            title: "Overstock Warning".to_string(),
            message: "Winter Jackets category showing 40% overstock in Northeast region".to_string(),
            severity: Severity::Medium,
            product_id: None,
            store_id: None,
            is_active: true,
        },
        NewAlert {
            kind: AlertKind::Optimal,
            title: "Optimal Stock Level".to_string(),
            message: "Gaming Consoles maintaining perfect stock balance across all stores".to_string(),
            severity: Severity::Low,
            product_id: None,
            store_id: None,
            is_active: true,
        },
    ]
}

pub fn mock_metric() -> NewMetric {
    NewMetric {
        total_products: 15234,
        total_stores: 1847,
        cost_savings: "2800000".to_string(),
        forecast_accuracy: "94.2".to_string(),
    }
}

/// Insert the mock dashboard records into `store`
pub fn seed_mock_data(store: &dyn InventoryStore) {
    let products = mock_products();
    let stores = mock_stores();
    let alerts = mock_alerts();
    let counts = (products.len(), stores.len(), alerts.len());

    for new in products {
        store.insert_product(new);
    }
    for new in stores {
        store.insert_store(new);
    }
    for new in alerts {
        store.insert_alert(new);
    }
    store.insert_metric(mock_metric());

    info!(
        "Seeded mock data: {} products, {} stores, {} alerts, 1 metric snapshot",
        counts.0, counts.1, counts.2
    );
}
