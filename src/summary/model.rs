use crate::snapshot::StockSnapshot;

/// Payload for a whole-market narrative: price action plus recent headlines.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketDigest {
    /// The ticker symbol.
    pub symbol: String,
    /// Current price.
    pub price: f64,
    /// Daily percent change.
    pub change_percent: f64,
    /// Daily percent change versus the benchmark.
    pub relative_performance: f64,
    /// The benchmark symbol the relative figure refers to.
    pub benchmark: String,
    /// Up to a few recent headlines for context.
    pub headlines: Vec<String>,
}

impl MarketDigest {
    /// Build a digest from an assembled snapshot, taking the top three
    /// headlines.
    pub fn from_snapshot(snapshot: &StockSnapshot, benchmark: impl Into<String>) -> Self {
        Self {
            symbol: snapshot.quote.symbol.clone(),
            price: snapshot.quote.price,
            change_percent: snapshot.quote.change_percent,
            relative_performance: snapshot.benchmark.relative_performance,
            benchmark: benchmark.into(),
            headlines: snapshot
                .news
                .iter()
                .take(3)
                .map(|n| n.headline.clone())
                .collect(),
        }
    }
}

/// Payload for a single-article takeaway.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalystDigest {
    /// The headline to summarize.
    pub headline: String,
    /// The provider's free-text summary, if any.
    pub summary: Option<String>,
}

/// The kind of summary to generate, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryRequest {
    /// A 2-3 sentence summary of the day's price action and narrative.
    Market(MarketDigest),
    /// A one-sentence takeaway for a single news article.
    Catalyst(CatalystDigest),
}
