use crate::{
    core::{LensClient, LensError, client::RetryConfig, net},
    quote::{model::Quote, wire},
};

pub(super) async fn fetch_quote(
    client: &LensClient,
    symbol: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<Quote, LensError> {
    let token = client.finnhub_key()?;

    let mut url = client.base_quote().join("quote")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
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
    let raw: wire::QuoteNode = serde_json::from_str(&body)?;

    // Finnhub's convention for "no such symbol or market closed".
    if raw.current == 0.0 {
        return Err(LensError::SymbolNotFound {
            symbol: symbol.to_string(),
        });
    }

    Ok(Quote::from_parts(symbol.to_string(), &raw))
}
