use serde::Serialize;

/// A single news article for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// Provider-issued identifier, or a random fallback when the provider
    /// omits one.
    pub id: String,
    /// The headline of the article.
    pub headline: String,
    /// The publisher (e.g., "Reuters").
    pub source: String,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub datetime: i64,
    /// A direct link to the article.
    pub url: String,
    /// Optional free-text summary from the provider.
    pub summary: Option<String>,
}
