//! marketlens: async market snapshot client.
//!
//! Fetches a quote, recent company news, and 30 days of daily closes for a
//! ticker (plus a benchmark, `SPY` by default), then derives performance
//! windows, a 30-day range, and a benchmark-relative classification into a
//! single [`StockSnapshot`].
//!
//! ```no_run
//! use marketlens::{LensClient, SnapshotBuilder};
//!
//! # async fn run() -> Result<(), marketlens::LensError> {
//! let client = LensClient::from_env()?;
//! let snapshot = SnapshotBuilder::new(&client, "AAPL").fetch().await?;
//! println!("{} is {:?}", snapshot.quote.symbol, snapshot.status);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod news;
pub mod quote;
pub mod snapshot;
pub mod summary;

pub use crate::core::client::{Backoff, LensClient, LensClientBuilder, RetryConfig};
pub use crate::core::error::LensError;
pub use history::{HistoryBuilder, PricePoint};
pub use news::{NewsArticle, NewsBuilder};
pub use quote::{Quote, QuoteBuilder};
pub use snapshot::{
    BenchmarkComparison, PerformanceRecord, Period, PriceRange, SnapshotBuilder, StockSnapshot,
    TrendStatus,
};
pub use summary::{CatalystDigest, MarketDigest, SummaryBuilder, SummaryRequest};
