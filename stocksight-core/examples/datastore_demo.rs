//! Demo of the in-memory inventory store and the dashboard analytics
//!
//! Seeds the demo catalogue, performs a partial update and prints what the
//! dashboard views derive from the resulting tables.

use stocksight_core::{
    chatbot::{self, ChatIntent, ChatSnapshot},
    export, insights, InventoryStore, MemoryStore, Priority, ProductPatch,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Stocksight Inventory Store Demo");
    println!("===============================");

    let store = MemoryStore::seeded();
    println!(
        "✓ Seeded {} products, {} stores, {} active alerts",
        store.products().len(),
        store.stores().len(),
        store.active_alerts().len()
    );

    let restocked = store
        .update_product(
            2,
            ProductPatch {
                current_stock: Some(40),
                priority: Some(Priority::Low),
                ..Default::default()
            },
        )
        .ok_or("product 2 should exist")?;
    println!("✓ Restocked {} to {} units", restocked.name, restocked.current_stock);

    println!("\nRecommendations export:");
    println!("{}", export::recommendations_csv(&store.products()));

    let regional = insights::regional_insights(&store.stores());
    println!("\nRegional insights:");
    println!("{}", serde_json::to_string_pretty(&regional)?);

    let snapshot = ChatSnapshot::collect(
        &store.products(),
        &store.active_alerts(),
        &store.stores(),
        store.latest_metric().as_ref(),
    );
    for message in ["What's my stock status?", "How many stores do we cover?"] {
        let reply = chatbot::respond(ChatIntent::classify(message), &snapshot);
        println!("\n> {}\n{}", message, reply);
    }

    Ok(())
}
