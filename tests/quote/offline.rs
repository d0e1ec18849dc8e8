use crate::common::{fixture, mock_quote, quote_body, setup_server, test_client};
use marketlens::{LensClient, LensError, QuoteBuilder, RetryConfig};

#[tokio::test]
async fn offline_quote_parses_recorded_fixture() {
    let server = setup_server();
    let mock = mock_quote(&server, "AAPL", fixture("quote_AAPL"));
    let client = test_client(&server);

    let quote = QuoteBuilder::new(&client, "AAPL").fetch().await.unwrap();

    mock.assert();
    assert_eq!(quote.symbol, "AAPL");
    assert!((quote.price - 189.84).abs() < 1e-9);
    assert!((quote.previous_close - 188.32).abs() < 1e-9);
    assert!((quote.change - (189.84 - 188.32)).abs() < 1e-9);
    let expected_pct = (189.84 - 188.32) / 188.32 * 100.0;
    assert!((quote.change_percent - expected_pct).abs() < 1e-9);
    assert!((quote.high - 190.61).abs() < 1e-9);
    assert!((quote.low - 187.93).abs() < 1e-9);
    assert!(quote.timestamp > 0);
}

#[tokio::test]
async fn offline_quote_normalizes_symbol_before_request() {
    let server = setup_server();
    // The mock only matches the uppercased symbol.
    let mock = mock_quote(&server, "AAPL", quote_body(190.0, 188.0, 188.5, 191.0, 187.0));
    let client = test_client(&server);

    let quote = QuoteBuilder::new(&client, "  aapl ").fetch().await.unwrap();

    mock.assert();
    assert_eq!(quote.symbol, "AAPL");
}

#[tokio::test]
async fn zero_price_sentinel_maps_to_symbol_not_found() {
    let server = setup_server();
    let _mock = mock_quote(&server, "NOPE", quote_body(0.0, 0.0, 0.0, 0.0, 0.0));
    let client = test_client(&server);

    let err = QuoteBuilder::new(&client, "NOPE").fetch().await.unwrap_err();
    assert!(matches!(err, LensError::SymbolNotFound { symbol } if symbol == "NOPE"));
}

#[tokio::test]
async fn blank_symbol_is_rejected_before_any_request() {
    let server = setup_server();
    let client = test_client(&server);

    let err = QuoteBuilder::new(&client, "   ").fetch().await.unwrap_err();
    assert!(matches!(err, LensError::InvalidSymbol));
}

#[tokio::test]
async fn missing_finnhub_key_is_a_configuration_error() {
    let server = setup_server();
    let client = LensClient::builder()
        .base_quote(crate::common::server_base(&server))
        .retry_policy(RetryConfig::disabled())
        .build()
        .unwrap();

    let err = QuoteBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(
        err,
        LensError::MissingApiKey { provider: "finnhub" }
    ));
}

#[tokio::test]
async fn server_errors_surface_as_typed_failures() {
    let server = setup_server();
    let _mock = crate::common::mock_quote_failure(&server, "AAPL", 503);
    let client = test_client(&server);

    let err = QuoteBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, LensError::ServerError { status: 503, .. }));
}
