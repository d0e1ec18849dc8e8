use std::collections::BTreeMap;

use serde::Serialize;

use crate::{history::PricePoint, news::NewsArticle, quote::Quote};

/// A performance window tag. Ordered so a `BTreeMap` keyed by `Period`
/// iterates `1D`, `5D`, `1M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Period {
    /// One session.
    #[serde(rename = "1D")]
    OneDay,
    /// Five trading days (index-offset approximation).
    #[serde(rename = "5D")]
    FiveDays,
    /// One month (earliest point of the 30-day window).
    #[serde(rename = "1M")]
    OneMonth,
}

impl Period {
    /// The wire tag for this period.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
        }
    }
}

/// Percent change over one period, absolute and relative to the benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    /// Which window this record covers.
    pub period: Period,
    /// Change over the window. For `1D` this is the absolute price change;
    /// for `5D`/`1M` it mirrors `change_percent`.
    pub change: f64,
    /// Percent change over the window.
    pub change_percent: f64,
    /// This symbol's percent change minus the benchmark's over the same
    /// window.
    pub vs_benchmark: f64,
}

/// Low/high bounds over the 30-day window (or the quote's session range
/// when no history is available).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    /// Lowest close in the window.
    pub low: f64,
    /// Highest close in the window.
    pub high: f64,
}

/// The benchmark's own daily move and the symbol's edge over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    /// The benchmark's daily percent change.
    pub benchmark_change: f64,
    /// Symbol daily percent change minus benchmark daily percent change.
    pub relative_performance: f64,
}

/// Classification of the symbol's one-day move versus the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    /// Relative performance above the policy threshold.
    Outperforming,
    /// Relative performance below the negative threshold.
    Underperforming,
    /// Everything in between, boundaries included.
    Neutral,
}

/// The assembled view model for one symbol: quote, performance windows,
/// price history, news, range, and benchmark comparison.
///
/// Constructed fresh per [`SnapshotBuilder::fetch`](crate::SnapshotBuilder::fetch)
/// call; it holds no shared state.
#[derive(Debug, Clone, Serialize)]
pub struct StockSnapshot {
    /// The current quote for the symbol.
    pub quote: Quote,
    /// Performance records keyed by period (`1D`, `5D`, `1M`).
    pub performance: BTreeMap<Period, PerformanceRecord>,
    /// Daily closes for the symbol, ascending by date. Empty when the
    /// history provider was unavailable.
    pub price_history: Vec<PricePoint>,
    /// Daily closes for the benchmark, ascending by date.
    pub benchmark_history: Vec<PricePoint>,
    /// Recent articles, provider order, bounded by the configured count.
    pub news: Vec<NewsArticle>,
    /// 30-day low/high range (session range fallback).
    pub range: PriceRange,
    /// Benchmark daily change and relative performance.
    pub benchmark: BenchmarkComparison,
    /// One-day classification versus the benchmark.
    pub status: TrendStatus,
    /// Placeholder confidence score, always within `[60, 95]`. Not stable
    /// across calls even for identical market data.
    pub confidence: u8,
}

impl StockSnapshot {
    /// The performance record for a given period.
    pub fn performance(&self, period: Period) -> Option<&PerformanceRecord> {
        self.performance.get(&period)
    }
}
