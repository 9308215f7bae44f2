//! Unit tests for the signal engine pipeline

use tradewind::error::EngineError;
use tradewind::models::signal::Action;
use tradewind::signals::engine::{EvaluationRequest, SignalEngine, MIN_CANDLES};
use tradewind::signals::risk::RiskProfile;

use crate::support::{flat_candles, uptrend_candles};

fn request(symbol: &str, timeframe: &str) -> EvaluationRequest {
    EvaluationRequest {
        symbol: symbol.to_string(),
        timeframe: timeframe.to_string(),
        capital: 10_000.0,
        risk_profile: RiskProfile::Standard,
        advanced_indicators: false,
    }
}

#[test]
fn short_series_is_data_unavailable() {
    let result = SignalEngine::evaluate(uptrend_candles(MIN_CANDLES - 1), &request("EURUSD", "1h"));
    assert!(matches!(result, Err(EngineError::DataUnavailable(_))));
}

#[test]
fn empty_series_is_data_unavailable() {
    let result = SignalEngine::evaluate(Vec::new(), &request("EURUSD", "1h"));
    assert!(matches!(result, Err(EngineError::DataUnavailable(_))));
}

#[test]
fn evaluation_is_deterministic() {
    let candles = uptrend_candles(295);
    let first = SignalEngine::evaluate(candles.clone(), &request("EURUSD", "1h")).unwrap();
    let second = SignalEngine::evaluate(candles, &request("EURUSD", "1h")).unwrap();
    assert_eq!(first.action, second.action);
    assert_eq!(first.entry, second.entry);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.indicators, second.indicators);
    assert_eq!(first.trade, second.trade);
}

#[test]
fn hold_signal_carries_no_trade_plan() {
    let signal = SignalEngine::evaluate(flat_candles(300), &request("USDJPY", "1h")).unwrap();
    assert_eq!(signal.action, Action::Hold);
    assert!(signal.trade.is_none());
    assert_eq!(signal.stop_loss(), 0.0);
    assert!(signal.take_profits().is_empty());
    assert_eq!(signal.confidence, 0);
}

#[test]
fn non_hold_signal_has_three_targets_and_a_real_stop() {
    let signal = SignalEngine::evaluate(uptrend_candles(295), &request("EURUSD", "1h")).unwrap();
    assert_ne!(signal.action, Action::Hold);
    assert_eq!(signal.take_profits().len(), 3);
    assert_ne!(signal.stop_loss(), signal.entry);
    assert!(signal.confidence <= 100);
}

#[test]
fn buy_exits_bracket_the_entry() {
    let signal = SignalEngine::evaluate(uptrend_candles(295), &request("EURUSD", "1h")).unwrap();
    assert_eq!(signal.action, Action::Buy);
    assert!(signal.stop_loss() < signal.entry);
    let targets = signal.take_profits();
    assert!(targets[0] > signal.entry);
    assert!(targets[0] < targets[1] && targets[1] < targets[2]);
    let trade = signal.trade.as_ref().unwrap();
    assert!(trade.position_size > 0.0);
    assert!((trade.risk_amount - 100.0).abs() < 1e-9);
}

#[test]
fn advanced_snapshot_only_when_requested() {
    let candles = uptrend_candles(295);
    let mut advanced_request = request("EURUSD", "1h");
    advanced_request.advanced_indicators = true;

    let basic = SignalEngine::evaluate(candles.clone(), &request("EURUSD", "1h")).unwrap();
    let advanced = SignalEngine::evaluate(candles, &advanced_request).unwrap();
    assert!(basic.indicators.advanced.is_none());

    let extras = advanced.indicators.advanced.unwrap();
    assert!(extras.vwap > 0.0);
    assert!(extras.fibonacci.high > extras.fibonacci.low);
    assert!(extras.ichimoku.tenkan >= extras.ichimoku.kijun);
}
