use chrono::{DateTime, Duration, Utc};

use crate::{
    core::{LensClient, LensError, client::RetryConfig, net},
    history::{model::PricePoint, wire},
};

pub(super) async fn fetch_daily_closes(
    client: &LensClient,
    symbol: &str,
    lookback_days: i64,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<PricePoint>, LensError> {
    let key = client.polygon_key()?;

    let to = Utc::now().date_naive();
    let from = to - Duration::days(lookback_days);

    let mut url = client.base_history().join(&format!(
        "v2/aggs/ticker/{symbol}/range/1/day/{from}/{to}"
    ))?;
    url.query_pairs_mut()
        .append_pair("adjusted", "true")
        .append_pair("sort", "asc")
        .append_pair("apiKey", key);

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
    let envelope: wire::AggsEnvelope = serde_json::from_str(&body)?;

    let points = envelope
        .results
        .unwrap_or_default()
        .into_iter()
        .filter_map(|bar| {
            let date = DateTime::<Utc>::from_timestamp_millis(bar.timestamp)?.date_naive();
            Some(PricePoint {
                date,
                price: bar.close,
            })
        })
        .collect();

    Ok(points)
}
