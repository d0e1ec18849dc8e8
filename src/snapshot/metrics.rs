//! Pure derived-metric arithmetic for the snapshot aggregator.
//!
//! The 5-day window is an index offset (`len - 6`) into the ordered daily
//! closes, and the 1-month window reuses the earliest point of the 30-day
//! lookback. Both are deliberate calendar-window approximations kept for
//! compatibility with downstream consumers, not true trading-day counting.

use crate::history::PricePoint;
use crate::quote::Quote;
use crate::snapshot::model::{PriceRange, TrendStatus};

/// Relative-performance threshold (percentage points) for classification.
pub(crate) const STATUS_THRESHOLD: f64 = 2.0;

/// Percent change from `from` to `to`; `0` when `from` is zero.
pub(crate) fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        (to - from) / from * 100.0
    }
}

/// Percent change from "5 trading days ago" (index `len - 6`, clamped to
/// the earliest available point) to `current`. `0` for an empty series.
pub(crate) fn five_day_change(history: &[PricePoint], current: f64) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let reference = &history[history.len().saturating_sub(6)];
    percent_change(reference.price, current)
}

/// Percent change from the earliest point of the window to `current`.
/// `0` for an empty series.
pub(crate) fn one_month_change(history: &[PricePoint], current: f64) -> f64 {
    history
        .first()
        .map_or(0.0, |p| percent_change(p.price, current))
}

/// Min/max of the window's closes, falling back to the quote's session
/// low/high when no history is available.
pub(crate) fn thirty_day_range(history: &[PricePoint], quote: &Quote) -> PriceRange {
    if history.is_empty() {
        return PriceRange {
            low: quote.low,
            high: quote.high,
        };
    }
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for p in history {
        low = low.min(p.price);
        high = high.max(p.price);
    }
    PriceRange { low, high }
}

/// Classify the one-day relative performance. Boundary values map to
/// `Neutral`.
pub(crate) fn classify(relative_performance: f64) -> TrendStatus {
    if relative_performance > STATUS_THRESHOLD {
        TrendStatus::Outperforming
    } else if relative_performance < -STATUS_THRESHOLD {
        TrendStatus::Underperforming
    } else {
        TrendStatus::Neutral
    }
}

/// Placeholder confidence heuristic: `85 + rand(0..10)`, clamped to the
/// `[60, 95]` contract. Non-deterministic per call.
pub(crate) fn confidence() -> u8 {
    let raw = 85.0 + rand::random::<f64>() * 10.0;
    raw.clamp(60.0, 95.0).round() as u8
}
