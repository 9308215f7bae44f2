//! Unit tests for the daily aggregator

use tradewind::services::StaticMarketDataProvider;
use tradewind::signals::aggregation::{generate_daily_signals, SubscribedPair, MAX_DAILY_SIGNALS};
use tradewind::signals::risk::RiskProfile;

use crate::support::{downtrend_candles, flat_candles, uptrend_candles};

#[tokio::test]
async fn one_failing_pair_does_not_abort_the_batch() {
    let provider = StaticMarketDataProvider::new()
        .with_series("EURUSD", "1h", uptrend_candles(295))
        .with_series("GBPUSD", "1h", downtrend_candles(295));
    // XAUUSD has no data and fails with DataUnavailable
    let pairs = vec![
        SubscribedPair::new("EURUSD", "1h"),
        SubscribedPair::new("GBPUSD", "1h"),
        SubscribedPair::new("XAUUSD", "1h"),
    ];

    let signals =
        generate_daily_signals(&provider, &pairs, 10_000.0, RiskProfile::Standard, false).await;

    assert_eq!(signals.len(), 2);
    assert!(signals.iter().all(|s| s.symbol != "XAUUSD"));
}

#[tokio::test]
async fn hold_results_are_discarded() {
    let provider = StaticMarketDataProvider::new()
        .with_series("USDJPY", "1h", flat_candles(300))
        .with_series("EURUSD", "1h", uptrend_candles(295));
    let pairs = vec![
        SubscribedPair::new("USDJPY", "1h"),
        SubscribedPair::new("EURUSD", "1h"),
    ];

    let signals =
        generate_daily_signals(&provider, &pairs, 10_000.0, RiskProfile::Standard, false).await;

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].symbol, "EURUSD");
}

#[tokio::test]
async fn batch_is_capped_and_sorted_by_confidence() {
    let mut provider = StaticMarketDataProvider::new();
    for symbol in ["EURUSD", "GBPUSD", "USDJPY", "AUDUSD"] {
        provider = provider.with_series(symbol, "1h", uptrend_candles(295));
    }
    let pairs: Vec<SubscribedPair> = ["EURUSD", "GBPUSD", "USDJPY", "AUDUSD"]
        .iter()
        .map(|s| SubscribedPair::new(s, "1h"))
        .collect();

    let signals =
        generate_daily_signals(&provider, &pairs, 10_000.0, RiskProfile::Standard, false).await;

    assert_eq!(signals.len(), MAX_DAILY_SIGNALS);
    assert!(signals
        .windows(2)
        .all(|pair| pair[0].confidence >= pair[1].confidence));
}

#[tokio::test]
async fn empty_subscription_list_yields_empty_batch() {
    let provider = StaticMarketDataProvider::new();
    let signals =
        generate_daily_signals(&provider, &[], 10_000.0, RiskProfile::Standard, false).await;
    assert!(signals.is_empty());
}
