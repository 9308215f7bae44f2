//! End-to-end tests for the gated signal service

use chrono::NaiveTime;
use tradewind::entitlements::{AccessWindow, Tier};
use tradewind::error::EngineError;
use tradewind::services::{SignalRequest, SignalService, StaticMarketDataProvider};
use tradewind::signals::risk::RiskProfile;

use crate::support::uptrend_candles;

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

fn request(tier: Tier, symbol: &str, timeframe: &str) -> SignalRequest {
    SignalRequest {
        symbol: symbol.to_string(),
        timeframe: timeframe.to_string(),
        tier,
        capital: 10_000.0,
        risk_profile: RiskProfile::Standard,
        signals_used_today: 0,
        requests_this_hour: 0,
        access_window: AccessWindow::parse("09:00-13:00"),
        local_time: noon(),
    }
}

#[tokio::test]
async fn timeframe_is_rejected_before_any_fetch() {
    // the provider has no data at all, so reaching it would surface
    // DataUnavailable; the gate must fail first
    let service = SignalService::new(StaticMarketDataProvider::new());
    let result = service.generate(&request(Tier::Free, "EURUSD", "5m")).await;
    assert!(matches!(
        result,
        Err(EngineError::TimeframeNotPermitted { .. })
    ));
}

#[tokio::test]
async fn exhausted_quota_is_rejected_before_any_fetch() {
    let service = SignalService::new(StaticMarketDataProvider::new());
    let mut req = request(Tier::Free, "EURUSD", "1h");
    req.signals_used_today = 1;
    let result = service.generate(&req).await;
    assert!(matches!(result, Err(EngineError::QuotaExceeded { .. })));
}

#[tokio::test]
async fn free_tier_outside_its_window_is_rejected() {
    let service = SignalService::new(StaticMarketDataProvider::new());
    let mut req = request(Tier::Free, "EURUSD", "1h");
    req.local_time = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
    let result = service.generate(&req).await;
    assert!(matches!(result, Err(EngineError::OutsideAccessWindow { .. })));
}

#[tokio::test]
async fn missing_market_data_surfaces_as_data_unavailable() {
    let service = SignalService::new(StaticMarketDataProvider::new());
    let result = service.generate(&request(Tier::Premium, "EURUSD", "1h")).await;
    assert!(matches!(result, Err(EngineError::DataUnavailable(_))));
}

#[tokio::test]
async fn premium_request_gets_signal_and_advanced_indicators() {
    let provider =
        StaticMarketDataProvider::new().with_series("EURUSD", "1h", uptrend_candles(295));
    let service = SignalService::new(provider);

    let result = service
        .generate(&request(Tier::Premium, "EURUSD", "1h"))
        .await
        .unwrap();

    assert_eq!(result.signal.symbol, "EURUSD");
    assert!(result.signal.indicators.advanced.is_some());
    assert_eq!(result.permissions.tier, Tier::Premium);
    assert_eq!(result.permissions.custom_signals_remaining, None);
    assert!(result.permissions.portfolio_optimization);
}

#[tokio::test]
async fn free_tier_signal_reports_remaining_quota() {
    let provider =
        StaticMarketDataProvider::new().with_series("EURUSD", "1h", uptrend_candles(295));
    let service = SignalService::new(provider);

    let result = service
        .generate(&request(Tier::Free, "EURUSD", "1h"))
        .await
        .unwrap();

    assert!(result.signal.indicators.advanced.is_none());
    assert_eq!(result.permissions.custom_signals_remaining, Some(0));
    assert!(!result.permissions.advanced_indicators);
}
