use crate::{
    core::{LensClient, LensError, client::RetryConfig, net},
    summary::{
        model::{CatalystDigest, MarketDigest, SummaryRequest},
        wire,
    },
};

const FALLBACK_TEXT: &str = "Unable to generate summary.";

const MARKET_SYSTEM_PROMPT: &str = "You are a concise market analyst. Provide a 2-3 sentence \
    summary of today's price action and key market narrative. Focus on what moved the stock and \
    what to watch. Be direct and actionable. Never use markdown.";

const CATALYST_SYSTEM_PROMPT: &str = "You are a concise market analyst. Summarize this news \
    headline in one short sentence explaining why it matters for the stock. Be direct. Never \
    use markdown.";

fn market_user_prompt(d: &MarketDigest) -> String {
    let direction = if d.change_percent >= 0.0 { "up" } else { "down" };
    let standing = if d.relative_performance >= 0.0 {
        "Outperforming"
    } else {
        "Underperforming"
    };
    let headlines = if d.headlines.is_empty() {
        "No recent news".to_string()
    } else {
        d.headlines.join("; ")
    };
    format!(
        "{} is trading at ${:.2}, {} {:.2}% today. {} {} by {:.2}%. Recent headlines: {}. \
         Summarize today's price action and narrative.",
        d.symbol,
        d.price,
        direction,
        d.change_percent.abs(),
        standing,
        d.benchmark,
        d.relative_performance.abs(),
        headlines,
    )
}

fn catalyst_user_prompt(d: &CatalystDigest) -> String {
    match &d.summary {
        Some(s) => format!(
            "Headline: \"{}\". Summary: {} What's the key takeaway for investors?",
            d.headline, s
        ),
        None => format!(
            "Headline: \"{}\". What's the key takeaway for investors?",
            d.headline
        ),
    }
}

pub(super) async fn fetch_summary(
    client: &LensClient,
    request: &SummaryRequest,
    model: &str,
    max_tokens: u32,
    retry_override: Option<&RetryConfig>,
) -> Result<String, LensError> {
    let key = client.summary_key()?;

    let (system, user) = match request {
        SummaryRequest::Market(d) => (MARKET_SYSTEM_PROMPT, market_user_prompt(d)),
        SummaryRequest::Catalyst(d) => (CATALYST_SYSTEM_PROMPT, catalyst_user_prompt(d)),
    };

    let payload = wire::ChatRequest {
        model,
        messages: vec![
            wire::ChatMessage {
                role: "system",
                content: system,
            },
            wire::ChatMessage {
                role: "user",
                content: &user,
            },
        ],
        max_tokens,
    };

    let url = client.base_summary().join("chat/completions")?;
    let req = client
        .http()
        .post(url)
        .bearer_auth(key)
        .json(&payload);

    let resp = client.send_with_retry(req, retry_override).await?;
    let body = net::get_text(resp).await?;
    let parsed: wire::ChatResponse = serde_json::from_str(&body)?;

    let text = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_TEXT.to_string());

    Ok(text)
}
