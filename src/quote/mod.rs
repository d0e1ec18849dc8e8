mod api;
mod model;
mod wire;

pub use model::Quote;

use crate::core::client::RetryConfig;
use crate::core::{LensClient, LensError};

/// A builder for fetching the current quote for a single symbol.
pub struct QuoteBuilder {
    client: LensClient,
    symbol: String,
    retry_override: Option<RetryConfig>,
}

impl QuoteBuilder {
    /// Creates a new `QuoteBuilder` for a given symbol.
    pub fn new(client: &LensClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches the quote.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbol` for a blank symbol, `MissingApiKey` when no
    /// Finnhub token is configured, `SymbolNotFound` when the provider
    /// reports the zero-price sentinel, and transport/status errors from the
    /// HTTP layer otherwise.
    pub async fn fetch(self) -> Result<Quote, LensError> {
        let symbol = crate::core::net::normalize_symbol(&self.symbol)?;
        api::fetch_quote(&self.client, &symbol, self.retry_override.as_ref()).await
    }
}
