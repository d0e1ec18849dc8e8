use crate::core::LensError;

/// Map a non-success HTTP status to the matching error variant.
pub(crate) fn status_error(status: u16, url: &url::Url) -> LensError {
    let url = url.to_string();
    match status {
        402 => LensError::QuotaExhausted { url },
        429 => LensError::RateLimited { url },
        500..=599 => LensError::ServerError { status, url },
        _ => LensError::Status { status, url },
    }
}

/// Check a response status and read the body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, LensError> {
    if !resp.status().is_success() {
        return Err(status_error(resp.status().as_u16(), resp.url()));
    }
    Ok(resp.text().await?)
}

/// Normalize a user-supplied ticker: trim and uppercase, rejecting empties.
pub(crate) fn normalize_symbol(symbol: &str) -> Result<String, LensError> {
    let s = symbol.trim();
    if s.is_empty() {
        return Err(LensError::InvalidSymbol);
    }
    Ok(s.to_uppercase())
}
