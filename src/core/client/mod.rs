//! Public client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants`
//! (UA, default bases, env var names).

mod constants;
mod retry;

use crate::core::LensError;
use constants::{
    DEFAULT_BASE_HISTORY, DEFAULT_BASE_NEWS, DEFAULT_BASE_QUOTE, DEFAULT_BASE_SUMMARY,
    DEFAULT_TIMEOUT, ENV_FINNHUB_KEY, ENV_POLYGON_KEY, ENV_SUMMARY_KEY, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub use retry::{Backoff, RetryConfig};

/// A cheaply clonable handle to the HTTP client, provider base URLs, and
/// credentials. One `LensClient` can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct LensClient {
    http: Client,
    base_quote: Url,
    base_news: Url,
    base_history: Url,
    base_summary: Url,

    finnhub_key: Option<String>,
    polygon_key: Option<String>,
    summary_key: Option<String>,

    retry: RetryConfig,
}

impl LensClient {
    /// Create a new builder.
    pub fn builder() -> LensClientBuilder {
        LensClientBuilder::default()
    }

    /// Build a client from the `FINNHUB_API_KEY`, `POLYGON_API_KEY`, and
    /// `SUMMARY_API_KEY` environment variables. Unset variables leave the
    /// corresponding credential unconfigured; whether that is an error is
    /// decided at call time by the endpoint that needs it.
    ///
    /// # Errors
    ///
    /// Returns a `LensError` if the underlying HTTP client cannot be built.
    pub fn from_env() -> Result<Self, LensError> {
        let mut b = Self::builder();
        if let Ok(k) = std::env::var(ENV_FINNHUB_KEY) {
            b = b.finnhub_api_key(k);
        }
        if let Ok(k) = std::env::var(ENV_POLYGON_KEY) {
            b = b.polygon_api_key(k);
        }
        if let Ok(k) = std::env::var(ENV_SUMMARY_KEY) {
            b = b.summary_api_key(k);
        }
        b.build()
    }

    /* -------- internal getters used by the endpoint modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_history(&self) -> &Url {
        &self.base_history
    }
    pub(crate) fn base_summary(&self) -> &Url {
        &self.base_summary
    }

    /// The Finnhub token, or `MissingApiKey` if unconfigured.
    pub(crate) fn finnhub_key(&self) -> Result<&str, LensError> {
        self.finnhub_key
            .as_deref()
            .ok_or(LensError::MissingApiKey {
                provider: "finnhub",
            })
    }

    /// The Polygon key, or `MissingApiKey` if unconfigured.
    pub(crate) fn polygon_key(&self) -> Result<&str, LensError> {
        self.polygon_key
            .as_deref()
            .ok_or(LensError::MissingApiKey {
                provider: "polygon",
            })
    }

    /// The summary gateway key, or `MissingApiKey` if unconfigured.
    pub(crate) fn summary_key(&self) -> Result<&str, LensError> {
        self.summary_key
            .as_deref()
            .ok_or(LensError::MissingApiKey {
                provider: "summary gateway",
            })
    }

    /// Send a request, retrying transient failures per the retry policy.
    /// `retry_override` takes precedence over the client-wide configuration.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, LensError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| LensError::Data("request body is not cloneable".into()))?;
            let outcome = this_try.send().await;

            let retryable = match &outcome {
                Ok(resp) => cfg.retry_on_status.contains(&resp.status().as_u16()),
                Err(e) => {
                    (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect)
                }
            };

            if cfg.enabled && retryable && attempt < cfg.max_retries {
                attempt += 1;
                let delay = cfg.backoff.delay(attempt);
                tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying request");
                tokio::time::sleep(delay).await;
                continue;
            }

            return outcome.map_err(LensError::from);
        }
    }
}

impl Default for LensClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`LensClient`].
#[derive(Default)]
pub struct LensClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    base_news: Option<Url>,
    base_history: Option<Url>,
    base_summary: Option<Url>,

    finnhub_key: Option<String>,
    polygon_key: Option<String>,
    summary_key: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl LensClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote endpoint base (default `https://finnhub.io/api/v1/`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the company-news endpoint base (default `https://finnhub.io/api/v1/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the daily-bars endpoint base (default `https://api.polygon.io/`).
    #[must_use]
    pub fn base_history(mut self, url: Url) -> Self {
        self.base_history = Some(url);
        self
    }

    /// Override the narrative-summary gateway base.
    #[must_use]
    pub fn base_summary(mut self, url: Url) -> Self {
        self.base_summary = Some(url);
        self
    }

    /// Set the Finnhub API token (required by quote and news calls).
    #[must_use]
    pub fn finnhub_api_key(mut self, key: impl Into<String>) -> Self {
        self.finnhub_key = Some(key.into());
        self
    }

    /// Set the Polygon API key (history calls degrade to empty without it).
    #[must_use]
    pub fn polygon_api_key(mut self, key: impl Into<String>) -> Self {
        self.polygon_key = Some(key.into());
        self
    }

    /// Set the narrative-summary gateway key.
    #[must_use]
    pub fn summary_api_key(mut self, key: impl Into<String>) -> Self {
        self.summary_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: 10s.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the client-wide retry policy. Default: [`RetryConfig::default`].
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `LensError` if a default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<LensClient, LensError> {
        let base_quote = self.base_quote.unwrap_or(Url::parse(DEFAULT_BASE_QUOTE)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_history = self
            .base_history
            .unwrap_or(Url::parse(DEFAULT_BASE_HISTORY)?);
        let base_summary = self
            .base_summary
            .unwrap_or(Url::parse(DEFAULT_BASE_SUMMARY)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(LensClient {
            http,
            base_quote,
            base_news,
            base_history,
            base_summary,
            finnhub_key: self.finnhub_key,
            polygon_key: self.polygon_key,
            summary_key: self.summary_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
