use crate::common::{
    fixture, history_body, mock_history, mock_history_failure, mock_news, mock_quote,
    mock_quote_failure, quote_body, setup_server, test_client,
};
use marketlens::{LensError, Period, SnapshotBuilder, TrendStatus};

#[tokio::test]
async fn full_snapshot_assembles_from_fixtures() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", fixture("quote_AAPL"));
    let _b = mock_quote(&server, "SPY", fixture("quote_SPY"));
    let _n = mock_news(&server, "AAPL", fixture("news_AAPL"));
    let _h = mock_history(&server, "AAPL", fixture("history_AAPL"));
    let _bh = mock_history(&server, "SPY", fixture("history_SPY"));
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();

    assert_eq!(snap.quote.symbol, "AAPL");
    assert_eq!(snap.price_history.len(), 21);
    assert_eq!(snap.benchmark_history.len(), 21);
    assert_eq!(snap.news.len(), 5);
    assert_eq!(snap.performance.len(), 3);
    assert!((60..=95).contains(&snap.confidence));

    // Range comes from the 21 daily closes, not the session range.
    assert!((snap.range.low - 184.9).abs() < 1e-9);
    assert!((snap.range.high - 190.6).abs() < 1e-9);

    // The serialized view model keys the performance map by period tag.
    let json = serde_json::to_value(&snap).unwrap();
    let perf = json.get("performance").unwrap().as_object().unwrap();
    assert!(perf.contains_key("1D"));
    assert!(perf.contains_key("5D"));
    assert!(perf.contains_key("1M"));
}

#[tokio::test]
async fn outperforming_scenario_matches_expected_arithmetic() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(110.0, 100.0, 100.0, 111.0, 99.0));
    let _b = mock_quote(&server, "SPY", quote_body(102.0, 100.0, 100.0, 103.0, 99.5));
    let _n = mock_news(&server, "AAPL", "[]".to_string());
    // No history mocks: both aggs calls 404 and degrade.
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();

    assert!((snap.quote.change_percent - 10.0).abs() < 1e-9);
    assert!((snap.benchmark.benchmark_change - 2.0).abs() < 1e-9);
    assert!((snap.benchmark.relative_performance - 8.0).abs() < 1e-9);
    assert_eq!(snap.status, TrendStatus::Outperforming);

    let one_day = snap.performance(Period::OneDay).unwrap();
    assert!((one_day.change - 10.0).abs() < 1e-9);
    assert!((one_day.change_percent - 10.0).abs() < 1e-9);
    assert!((one_day.vs_benchmark - 8.0).abs() < 1e-9);
}

#[tokio::test]
async fn zero_price_sentinel_fails_the_whole_snapshot() {
    let server = setup_server();
    let _q = mock_quote(&server, "NOPE", quote_body(0.0, 0.0, 0.0, 0.0, 0.0));
    let _b = mock_quote(&server, "SPY", fixture("quote_SPY"));
    let _n = mock_news(&server, "NOPE", "[]".to_string());
    let client = test_client(&server);

    let err = SnapshotBuilder::new(&client, "NOPE").fetch().await.unwrap_err();
    assert!(matches!(err, LensError::SymbolNotFound { symbol } if symbol == "NOPE"));
}

#[tokio::test]
async fn unreachable_history_degrades_to_session_range_and_zero_windows() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(110.0, 100.0, 100.0, 111.0, 99.0));
    let _b = mock_quote(&server, "SPY", quote_body(102.0, 100.0, 100.0, 103.0, 99.5));
    let _n = mock_news(&server, "AAPL", "[]".to_string());
    let _h = mock_history_failure(&server, "AAPL", 500);
    let _bh = mock_history_failure(&server, "SPY", 500);
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();

    assert!(snap.price_history.is_empty());
    assert!(snap.benchmark_history.is_empty());
    assert_eq!(snap.performance(Period::FiveDays).unwrap().change, 0.0);
    assert_eq!(snap.performance(Period::OneMonth).unwrap().change, 0.0);
    assert!((snap.range.low - 99.0).abs() < 1e-9);
    assert!((snap.range.high - 111.0).abs() < 1e-9);
}

#[tokio::test]
async fn missing_polygon_key_still_yields_a_snapshot() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(110.0, 100.0, 100.0, 111.0, 99.0));
    let _b = mock_quote(&server, "SPY", quote_body(102.0, 100.0, 100.0, 103.0, 99.5));
    let _n = mock_news(&server, "AAPL", "[]".to_string());
    let client = marketlens::LensClient::builder()
        .base_quote(crate::common::server_base(&server))
        .base_news(crate::common::server_base(&server))
        .base_history(crate::common::server_base(&server))
        .finnhub_api_key("fh-test-token")
        .retry_policy(marketlens::RetryConfig::disabled())
        .build()
        .unwrap();

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();
    assert!(snap.price_history.is_empty());
    assert!((snap.range.low - 99.0).abs() < 1e-9);
}

#[tokio::test]
async fn benchmark_quote_failure_degrades_relative_fields() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(110.0, 100.0, 100.0, 111.0, 99.0));
    let _b = mock_quote_failure(&server, "SPY", 502);
    let _n = mock_news(&server, "AAPL", "[]".to_string());
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();

    assert_eq!(snap.benchmark.benchmark_change, 0.0);
    assert!((snap.benchmark.relative_performance - 10.0).abs() < 1e-9);
    assert_eq!(snap.status, TrendStatus::Outperforming);
}

#[tokio::test]
async fn short_history_collapses_five_day_onto_one_month() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(106.0, 100.0, 100.0, 107.0, 99.0));
    let _b = mock_quote(&server, "SPY", quote_body(100.0, 100.0, 100.0, 100.5, 99.5));
    let _n = mock_news(&server, "AAPL", "[]".to_string());
    let _h = mock_history(&server, "AAPL", history_body(&[100.0, 102.0, 104.0, 106.0]));
    let _bh = mock_history_failure(&server, "SPY", 404);
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();

    let five = snap.performance(Period::FiveDays).unwrap();
    let month = snap.performance(Period::OneMonth).unwrap();
    assert!((five.change_percent - 6.0).abs() < 1e-9);
    assert!((month.change_percent - 6.0).abs() < 1e-9);
    assert!((five.vs_benchmark - 6.0).abs() < 1e-9);
    assert!((snap.range.low - 100.0).abs() < 1e-9);
    assert!((snap.range.high - 106.0).abs() < 1e-9);
}

#[tokio::test]
async fn news_failure_degrades_to_an_empty_list() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(101.0, 100.0, 100.0, 102.0, 99.0));
    let _b = mock_quote(&server, "SPY", quote_body(100.5, 100.0, 100.0, 101.0, 99.5));
    // No news mock: the company-news call 404s and degrades.
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL").fetch().await.unwrap();
    assert!(snap.news.is_empty());
    assert_eq!(snap.status, TrendStatus::Neutral);
}

#[tokio::test]
async fn custom_benchmark_is_used_for_comparison() {
    let server = setup_server();
    let _q = mock_quote(&server, "AAPL", quote_body(110.0, 100.0, 100.0, 111.0, 99.0));
    let _b = mock_quote(&server, "QQQ", quote_body(104.0, 100.0, 100.0, 105.0, 99.5));
    let _n = mock_news(&server, "AAPL", "[]".to_string());
    let client = test_client(&server);

    let snap = SnapshotBuilder::new(&client, "AAPL")
        .benchmark("qqq")
        .fetch()
        .await
        .unwrap();

    assert!((snap.benchmark.benchmark_change - 4.0).abs() < 1e-9);
    assert!((snap.benchmark.relative_performance - 6.0).abs() < 1e-9);
}

#[tokio::test]
async fn blank_symbol_is_rejected() {
    let server = setup_server();
    let client = test_client(&server);

    let err = SnapshotBuilder::new(&client, "  ").fetch().await.unwrap_err();
    assert!(matches!(err, LensError::InvalidSymbol));
}
