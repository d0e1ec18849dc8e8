use chrono::NaiveDate;
use serde::Serialize;

/// One daily close: a `(date, price)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    /// The session date (UTC).
    pub date: NaiveDate,
    /// The closing price for that session.
    pub price: f64,
}
