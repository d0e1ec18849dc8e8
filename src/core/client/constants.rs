pub(super) const USER_AGENT: &str = concat!("marketlens/", env!("CARGO_PKG_VERSION"));

pub(super) const DEFAULT_BASE_QUOTE: &str = "https://finnhub.io/api/v1/";
pub(super) const DEFAULT_BASE_NEWS: &str = "https://finnhub.io/api/v1/";
pub(super) const DEFAULT_BASE_HISTORY: &str = "https://api.polygon.io/";
pub(super) const DEFAULT_BASE_SUMMARY: &str = "https://ai.gateway.lovable.dev/v1/";

/// Overall per-request timeout applied unless the builder overrides it.
pub(super) const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

pub(super) const ENV_FINNHUB_KEY: &str = "FINNHUB_API_KEY";
pub(super) const ENV_POLYGON_KEY: &str = "POLYGON_API_KEY";
pub(super) const ENV_SUMMARY_KEY: &str = "SUMMARY_API_KEY";
