use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum LensError {
    /// An error occurred during an HTTP request (transport, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned a 5xx status code.
    #[error("Server error: {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream rejected the request with HTTP 429.
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream rejected the request with HTTP 402 (credits exhausted).
    #[error("Quota exhausted at {url}")]
    QuotaExhausted {
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An empty (or all-whitespace) ticker symbol was provided.
    #[error("a non-empty ticker symbol is required")]
    InvalidSymbol,

    /// A required provider credential is not configured.
    #[error("API key for {provider} is not configured")]
    MissingApiKey {
        /// The provider the missing key belongs to.
        provider: &'static str,
    },

    /// The quote provider reported the zero-price sentinel for this symbol
    /// (unknown symbol or market closed).
    #[error("symbol not found or market closed: {symbol}")]
    SymbolNotFound {
        /// The symbol that was requested.
        symbol: String,
    },
}
