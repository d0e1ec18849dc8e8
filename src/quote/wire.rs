use serde::Deserialize;

/// Finnhub `/quote` response. Unknown symbols come back as all-zero fields
/// rather than an error status.
#[derive(Deserialize)]
pub(crate) struct QuoteNode {
    #[serde(rename = "c", default)]
    pub(crate) current: f64,
    #[serde(rename = "pc", default)]
    pub(crate) previous_close: f64,
    #[serde(rename = "o", default)]
    pub(crate) open: f64,
    #[serde(rename = "h", default)]
    pub(crate) high: f64,
    #[serde(rename = "l", default)]
    pub(crate) low: f64,
    #[serde(rename = "t", default)]
    pub(crate) timestamp: i64,
}
