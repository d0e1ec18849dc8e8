use serde::Serialize;

/// A point-in-time quote for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// The ticker symbol, uppercased.
    pub symbol: String,
    /// The current (regular market) price.
    pub price: f64,
    /// Absolute change versus the previous close.
    pub change: f64,
    /// Percent change versus the previous close; `0` when the previous
    /// close is zero.
    pub change_percent: f64,
    /// The previous session's closing price.
    pub previous_close: f64,
    /// Today's opening price.
    pub open: f64,
    /// Today's session high.
    pub high: f64,
    /// Today's session low.
    pub low: f64,
    /// Unix timestamp in milliseconds of when this quote was fetched.
    pub timestamp: i64,
}

impl Quote {
    pub(crate) fn from_parts(symbol: String, raw: &crate::quote::wire::QuoteNode) -> Self {
        let change = raw.current - raw.previous_close;
        let change_percent = if raw.previous_close == 0.0 {
            0.0
        } else {
            change / raw.previous_close * 100.0
        };
        Self {
            symbol,
            price: raw.current,
            change,
            change_percent,
            previous_close: raw.previous_close,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
