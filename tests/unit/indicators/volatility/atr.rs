//! Unit tests for the ATR indicator

use tradewind::indicators::volatility::atr::{calculate_atr, calculate_atr_default};

use crate::support::{flat_candles, uptrend_candles};

#[test]
fn constant_range_bars_average_to_that_range() {
    // flat bars span exactly 0.5 between high and low
    let atr = calculate_atr_default(&flat_candles(100)).unwrap();
    assert!((atr.value - 0.5).abs() < 1e-12);
}

#[test]
fn atr_is_positive_on_trending_data() {
    let atr = calculate_atr_default(&uptrend_candles(295)).unwrap();
    assert!(atr.value > 0.0);
}

#[test]
fn atr_requires_period_plus_one_bars() {
    assert!(calculate_atr(&flat_candles(14), 14).is_none());
    assert!(calculate_atr(&flat_candles(15), 14).is_some());
}
