//! Example: Query Waves mainnet for chain information.
//!
//! Run with: cargo run --example mainnet

use waves_node_api::{NodeClient, RequestOptions, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let client = NodeClient::mainnet();
    let options = RequestOptions::default();

    println!("=== Waves Mainnet Node Client ===\n");

    // 1. Chain height
    println!("1. Fetching chain height...");
    let height = client.fetch_height(&options).await?;
    println!("   Height: {}", height.height);
    println!();

    // 2. Last block header
    println!("2. Fetching last block header...");
    let header = client.fetch_headers_last(&options).await?;
    println!("   Height: {}", header.height);
    println!("   Signature: {}", header.signature);
    println!("   Generator: {}", header.generator);
    println!("   Transactions: {}", header.transaction_count);
    if let Some(time) = header.datetime() {
        println!("   Time: {time}");
    }
    println!("   Base target: {}", header.nxt_consensus.base_target);
    println!();

    // 3. Average block delay over the last 10 blocks
    println!("3. Fetching average block delay...");
    let id = header.id.as_deref().unwrap_or(&header.signature);
    let delay = client.fetch_delay(id, "10", &options).await?;
    println!("   Delay: {} ms", delay.delay);
    println!();

    // 4. Genesis block
    println!("4. Fetching genesis block...");
    let genesis = client.fetch_first(&options).await?;
    println!("   Genesis transactions: {}", genesis.transactions.len());
    if let Some(time) = genesis.header.datetime() {
        println!("   Genesis time: {time}");
    }
    println!();

    // 5. Active leases of the last generator
    println!("5. Fetching active leases of the last generator...");
    let leases = client.fetch_active_leases(&header.generator, &options).await?;
    println!("   Active leases: {}", leases.len());
    if let Some(first) = leases.first() {
        println!("   First lease: {} from {}", first.id, first.sender);
    }

    println!("\n=== Done! ===");
    Ok(())
}
