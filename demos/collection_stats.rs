//! Print trading statistics for a collection.
//!
//! Run with: OPENSEA_API_KEY=... cargo run --example collection_stats -- boredapeyachtclub

use opensea_rs::{ClientConfig, CollectionSlug, OpenSeaClient};

#[tokio::main]
async fn main() -> opensea_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let slug = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "boredapeyachtclub".to_string());

    let client = OpenSeaClient::with_config(ClientConfig::from_env())?;
    let collection = client.collections().get(&CollectionSlug::new(slug)).await?;

    println!("Name:         {:?}", collection.name);
    println!("Slug:         {:?}", collection.slug);
    if let Some(stats) = &collection.stats {
        println!("Floor:        {:?}", stats.floor_price);
        println!("Owners:       {:?}", stats.num_owners);
        println!("1d Volume:    {:?}", stats.one_day_volume);
        println!("7d Volume:    {:?}", stats.seven_day_volume);
        println!("Total Volume: {:?}", stats.total_volume);
    }

    Ok(())
}
