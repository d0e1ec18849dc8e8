use std::collections::BTreeMap;

use crate::{
    core::{LensClient, LensError, client::RetryConfig},
    history::{HistoryBuilder, PricePoint},
    news::NewsBuilder,
    quote::{Quote, QuoteBuilder},
    snapshot::{
        metrics,
        model::{BenchmarkComparison, PerformanceRecord, Period, StockSnapshot},
    },
};

/// Log-and-degrade for the optional upstreams: the snapshot must still
/// assemble when secondary data is missing.
fn ok_or_warn<T>(res: Result<T, LensError>, upstream: &str, symbol: &str) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(symbol, upstream, error = %e, "upstream failed, degrading to defaults");
            None
        }
    }
}

pub(super) async fn fetch_snapshot(
    client: &LensClient,
    symbol: &str,
    benchmark: &str,
    news_count: usize,
    history_days: i64,
    retry_override: Option<&RetryConfig>,
) -> Result<StockSnapshot, LensError> {
    let retry = retry_override.cloned();

    // All five upstream calls are independent; fan out and join before any
    // metric computation.
    let (quote_res, bench_quote_res, news_res, history_res, bench_history_res) = tokio::join!(
        QuoteBuilder::new(client, symbol)
            .retry_policy(retry.clone())
            .fetch(),
        QuoteBuilder::new(client, benchmark)
            .retry_policy(retry.clone())
            .fetch(),
        NewsBuilder::new(client, symbol)
            .count(news_count)
            .retry_policy(retry.clone())
            .fetch(),
        HistoryBuilder::new(client, symbol)
            .lookback_days(history_days)
            .retry_policy(retry.clone())
            .fetch(),
        HistoryBuilder::new(client, benchmark)
            .lookback_days(history_days)
            .retry_policy(retry)
            .fetch(),
    );

    // The target quote is the only mandatory upstream.
    let quote = quote_res?;

    let bench_quote = ok_or_warn(bench_quote_res, "benchmark quote", benchmark);
    let news = ok_or_warn(news_res, "news", symbol).unwrap_or_default();
    let price_history = ok_or_warn(history_res, "history", symbol).unwrap_or_default();
    let benchmark_history =
        ok_or_warn(bench_history_res, "benchmark history", benchmark).unwrap_or_default();

    Ok(assemble(
        quote,
        bench_quote,
        news,
        price_history,
        benchmark_history,
    ))
}

fn assemble(
    quote: Quote,
    bench_quote: Option<Quote>,
    news: Vec<crate::news::NewsArticle>,
    price_history: Vec<PricePoint>,
    benchmark_history: Vec<PricePoint>,
) -> StockSnapshot {
    let benchmark_change = bench_quote.map_or(0.0, |q| q.change_percent);
    let relative_performance = quote.change_percent - benchmark_change;

    let five_day = metrics::five_day_change(&price_history, quote.price);
    let one_month = metrics::one_month_change(&price_history, quote.price);

    // The benchmark's window changes are measured against its own last
    // close, so they stay self-consistent when its quote is degraded.
    let bench_current = benchmark_history.last().map(|p| p.price);
    let bench_five_day =
        bench_current.map_or(0.0, |c| metrics::five_day_change(&benchmark_history, c));
    let bench_one_month =
        bench_current.map_or(0.0, |c| metrics::one_month_change(&benchmark_history, c));

    let mut performance = BTreeMap::new();
    performance.insert(
        Period::OneDay,
        PerformanceRecord {
            period: Period::OneDay,
            change: quote.change,
            change_percent: quote.change_percent,
            vs_benchmark: relative_performance,
        },
    );
    performance.insert(
        Period::FiveDays,
        PerformanceRecord {
            period: Period::FiveDays,
            change: five_day,
            change_percent: five_day,
            vs_benchmark: five_day - bench_five_day,
        },
    );
    performance.insert(
        Period::OneMonth,
        PerformanceRecord {
            period: Period::OneMonth,
            change: one_month,
            change_percent: one_month,
            vs_benchmark: one_month - bench_one_month,
        },
    );

    let range = metrics::thirty_day_range(&price_history, &quote);
    let status = metrics::classify(relative_performance);
    let confidence = metrics::confidence();

    StockSnapshot {
        quote,
        performance,
        price_history,
        benchmark_history,
        news,
        range,
        benchmark: BenchmarkComparison {
            benchmark_change,
            relative_performance,
        },
        status,
        confidence,
    }
}
