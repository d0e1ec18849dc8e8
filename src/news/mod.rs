mod api;
mod model;
mod wire;

pub use model::NewsArticle;

use crate::core::client::RetryConfig;
use crate::core::{LensClient, LensError};

const DEFAULT_COUNT: usize = 5;
const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// A builder for fetching recent company news for a specific symbol.
pub struct NewsBuilder {
    client: LensClient,
    symbol: String,
    count: usize,
    lookback_days: i64,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &LensClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            count: DEFAULT_COUNT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            retry_override: None,
        }
    }

    /// Sets the maximum number of articles to return. Default: 5.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the calendar-day lookback for the date-bounded query. Default: 7.
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

    /// Executes the request and fetches the news articles. An empty list is
    /// a valid response, not an error.
    ///
    /// # Errors
    ///
    /// Returns a `LensError` if the symbol is blank, the Finnhub token is
    /// missing, or the request fails.
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, LensError> {
        let symbol = crate::core::net::normalize_symbol(&self.symbol)?;
        api::fetch_news(
            &self.client,
            &symbol,
            self.lookback_days,
            self.count,
            self.retry_override.as_ref(),
        )
        .await
    }
}
