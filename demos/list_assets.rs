//! List every asset an address owns, then stream the same listing.
//!
//! Run with: OPENSEA_API_KEY=... cargo run --example list_assets -- <owner-address>

use futures_util::StreamExt;
use opensea_rs::{Address, ClientConfig, OpenSeaClient};

#[tokio::main]
async fn main() -> opensea_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let owner = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0x3b417FaeE9d2ff636701100891DC2755b5321Cc3".to_string());
    let owner = Address::new(owner);

    let client = OpenSeaClient::with_config(ClientConfig::from_env())?;

    // 1. Collect everything up front
    println!("=== Assets owned by {} ===", owner);
    let assets = client.assets().list_all(&owner).await?;
    for asset in &assets {
        let collection = asset
            .collection
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("-");
        println!(
            "{:<40} #{:<12} {}",
            asset.name.as_deref().unwrap_or("(unnamed)"),
            asset.token_id.as_deref().unwrap_or("?"),
            collection
        );
    }
    println!("Total: {}\n", assets.len());

    // 2. Same listing, one page in memory at a time
    println!("=== First 5 via stream ===");
    let mut stream = client.assets().list_stream(&owner).take(5);
    while let Some(asset) = stream.next().await {
        let asset = asset?;
        println!("{:?}", asset.permalink);
    }

    Ok(())
}
