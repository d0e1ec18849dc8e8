use serde::Deserialize;

/// One item of the Finnhub `/company-news` array.
#[derive(Deserialize)]
pub(crate) struct NewsItem {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    #[serde(default)]
    pub(crate) headline: Option<String>,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) datetime: Option<i64>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) summary: Option<String>,
}
