use serde::Deserialize;

/// Polygon v2 aggregates envelope. `results` is absent when the window
/// contains no bars.
#[derive(Deserialize)]
pub(crate) struct AggsEnvelope {
    #[serde(default)]
    pub(crate) results: Option<Vec<AggBar>>,
}

#[derive(Deserialize)]
pub(crate) struct AggBar {
    /// Bar timestamp, Unix milliseconds.
    #[serde(rename = "t")]
    pub(crate) timestamp: i64,
    /// Closing price.
    #[serde(rename = "c")]
    pub(crate) close: f64,
}
