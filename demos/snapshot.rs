//! Fetch and print a full market snapshot for a symbol.
//!
//! ```bash
//! FINNHUB_API_KEY=... POLYGON_API_KEY=... cargo run --example snapshot -- AAPL
//! ```

use marketlens::{LensClient, MarketDigest, SnapshotBuilder, SummaryBuilder, SummaryRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marketlens=debug")),
        )
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let client = LensClient::from_env()?;

    let snapshot = SnapshotBuilder::new(&client, &symbol).fetch().await?;

    let q = &snapshot.quote;
    println!(
        "{}  {:.2}  {:+.2} ({:+.2}%)",
        q.symbol, q.price, q.change, q.change_percent
    );
    println!(
        "status: {:?}  vs benchmark: {:+.2}%  confidence: {}",
        snapshot.status, snapshot.benchmark.relative_performance, snapshot.confidence
    );
    println!(
        "30d range: {:.2} - {:.2}",
        snapshot.range.low, snapshot.range.high
    );
    for record in snapshot.performance.values() {
        println!(
            "  {:>2}: {:+.2}%  (vs benchmark {:+.2}%)",
            record.period.as_str(),
            record.change_percent,
            record.vs_benchmark
        );
    }
    for article in &snapshot.news {
        println!("  - [{}] {}", article.source, article.headline);
    }

    // The narrative summary is optional; skip quietly without a gateway key.
    let digest = MarketDigest::from_snapshot(&snapshot, "SPY");
    match SummaryBuilder::new(&client, SummaryRequest::Market(digest))
        .fetch()
        .await
    {
        Ok(text) => println!("\n{text}"),
        Err(e) => eprintln!("summary unavailable: {e}"),
    }

    Ok(())
}
