use chrono::{Duration, Utc};

use crate::{
    core::{LensClient, LensError, client::RetryConfig, net},
    news::{model::NewsArticle, wire},
};

pub(super) async fn fetch_news(
    client: &LensClient,
    symbol: &str,
    lookback_days: i64,
    count: usize,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsArticle>, LensError> {
    let token = client.finnhub_key()?;

    let to = Utc::now().date_naive();
    let from = to - Duration::days(lookback_days);

    let mut url = client.base_news().join("company-news")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("from", &from.to_string())
        .append_pair("to", &to.to_string())
        .append_pair("token", token);

    let resp = client
        .send_with_retry(
            client
                .http()
                .get(url.clone())
                .header("accept", "application/json"),
            retry_override,
        )
        .await?;

    let body = net::get_text(resp).await?;
    let items: Vec<wire::NewsItem> = serde_json::from_str(&body)?;

    // Provider order is preserved; items without a headline are dropped.
    let articles = items
        .into_iter()
        .filter_map(|item| {
            let headline = item.headline?;
            Some(NewsArticle {
                id: item
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| format!("news-{:016x}", rand::random::<u64>())),
                headline,
                source: item.source.unwrap_or_default(),
                datetime: item.datetime.unwrap_or_default(),
                url: item.url.unwrap_or_default(),
                summary: item.summary.filter(|s| !s.is_empty()),
            })
        })
        .take(count)
        .collect();

    Ok(articles)
}
