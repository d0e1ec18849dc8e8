//! Narrative-summary collaborator: turns a market digest or a single
//! headline into one short plain-text paragraph via an OpenAI-compatible
//! chat-completions gateway. Independent of the snapshot path; its
//! failures never degrade an assembled snapshot.

mod api;
mod model;
mod wire;

pub use model::{CatalystDigest, MarketDigest, SummaryRequest};

use crate::core::client::RetryConfig;
use crate::core::{LensClient, LensError};

const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";
const DEFAULT_MAX_TOKENS: u32 = 150;

/// A builder for requesting one narrative summary.
pub struct SummaryBuilder {
    client: LensClient,
    request: SummaryRequest,
    model: String,
    max_tokens: u32,
    retry_override: Option<RetryConfig>,
}

impl SummaryBuilder {
    /// Creates a new `SummaryBuilder` for a given request payload.
    pub fn new(client: &LensClient, request: SummaryRequest) -> Self {
        Self {
            client: client.clone(),
            request,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            retry_override: None,
        }
    }

    /// Overrides the gateway model id.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the completion token budget. Default: 150.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and returns the summary paragraph.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no gateway key is configured,
    /// `RateLimited` on HTTP 429, `QuotaExhausted` on HTTP 402, and the
    /// usual transport/status errors otherwise.
    pub async fn fetch(self) -> Result<String, LensError> {
        api::fetch_summary(
            &self.client,
            &self.request,
            &self.model,
            self.max_tokens,
            self.retry_override.as_ref(),
        )
        .await
    }
}
