//! The snapshot aggregator: one symbol in, one [`StockSnapshot`] out.
//!
//! Fans out to the quote, news, and history providers concurrently (for the
//! symbol and the benchmark), then derives the performance windows, 30-day
//! range, benchmark comparison, and trend classification. The target quote
//! is the only mandatory upstream; everything else degrades to defaults
//! with a warning rather than failing the whole request.

mod api;
pub(crate) mod metrics;
mod model;

pub use model::{
    BenchmarkComparison, PerformanceRecord, Period, PriceRange, StockSnapshot, TrendStatus,
};

use crate::core::client::RetryConfig;
use crate::core::{LensClient, LensError};

/// Reference instrument for relative-performance metrics.
pub const DEFAULT_BENCHMARK: &str = "SPY";

const DEFAULT_NEWS_COUNT: usize = 5;
const DEFAULT_HISTORY_DAYS: i64 = 30;

/// A builder for assembling a full market snapshot for one symbol.
pub struct SnapshotBuilder {
    client: LensClient,
    symbol: String,
    benchmark: String,
    news_count: usize,
    history_days: i64,
    retry_override: Option<RetryConfig>,
}

impl SnapshotBuilder {
    /// Creates a new `SnapshotBuilder` for a given symbol.
    pub fn new(client: &LensClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            benchmark: DEFAULT_BENCHMARK.to_string(),
            news_count: DEFAULT_NEWS_COUNT,
            history_days: DEFAULT_HISTORY_DAYS,
            retry_override: None,
        }
    }

    /// Overrides the benchmark symbol. Default: `SPY`.
    #[must_use]
    pub fn benchmark(mut self, symbol: impl Into<String>) -> Self {
        self.benchmark = symbol.into();
        self
    }

    /// Sets the maximum number of news articles to include. Default: 5.
    #[must_use]
    pub const fn news_count(mut self, count: usize) -> Self {
        self.news_count = count;
        self
    }

    /// Sets the history lookback window in calendar days. Default: 30.
    #[must_use]
    pub const fn history_days(mut self, days: i64) -> Self {
        self.history_days = days;
        self
    }

    /// Overrides the default retry policy for all upstream calls of this
    /// snapshot.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches everything and assembles the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbol` for a blank symbol, `MissingApiKey` when the
    /// Finnhub token is unconfigured, `SymbolNotFound` when the quote
    /// provider reports the zero-price sentinel for the target symbol, and
    /// transport/status errors when the target quote fetch fails. Failures
    /// of the benchmark quote, news, or history calls degrade to defaults
    /// instead of erroring.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, benchmark = %self.benchmark))]
    pub async fn fetch(self) -> Result<StockSnapshot, LensError> {
        let symbol = crate::core::net::normalize_symbol(&self.symbol)?;
        let benchmark = crate::core::net::normalize_symbol(&self.benchmark)?;
        api::fetch_snapshot(
            &self.client,
            &symbol,
            &benchmark,
            self.news_count,
            self.history_days,
            self.retry_override.as_ref(),
        )
        .await
    }
}
