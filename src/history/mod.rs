mod api;
mod model;
mod wire;

pub use model::PricePoint;

use crate::core::client::RetryConfig;
use crate::core::{LensClient, LensError};

const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// A builder for fetching daily closing prices over a calendar lookback
/// window, ascending by date.
pub struct HistoryBuilder {
    client: LensClient,
    symbol: String,
    lookback_days: i64,
    retry_override: Option<RetryConfig>,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol.
    pub fn new(client: &LensClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            retry_override: None,
        }
    }

    /// Sets the calendar-day lookback window. Default: 30.
    #[must_use]
    pub const fn lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches the daily closes.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no Polygon key is configured, plus the
    /// usual transport/status errors. Callers that treat history as optional
    /// (the snapshot aggregator does) degrade these to an empty series.
    pub async fn fetch(self) -> Result<Vec<PricePoint>, LensError> {
        let symbol = crate::core::net::normalize_symbol(&self.symbol)?;
        api::fetch_daily_closes(
            &self.client,
            &symbol,
            self.lookback_days,
            self.retry_override.as_ref(),
        )
        .await
    }
}
