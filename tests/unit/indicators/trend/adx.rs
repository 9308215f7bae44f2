//! Unit tests for the ADX indicator

use crate::support::{flat_candles, uptrend_candles};
use tradewind::indicators::trend::adx::{calculate_adx, calculate_adx_default};

#[test]
fn flat_market_has_no_trend_strength() {
    let adx = calculate_adx_default(&flat_candles(300)).unwrap();
    assert!(adx.value < 5.0, "flat ADX should be near zero, got {}", adx.value);
}

#[test]
fn uptrend_shows_positive_directional_bias() {
    let adx = calculate_adx_default(&uptrend_candles(295)).unwrap();
    assert!(adx.value > 25.0);
    assert!(adx.plus_di > adx.minus_di);
}

#[test]
fn adx_requires_period_plus_one_bars() {
    assert!(calculate_adx(&uptrend_candles(14), 14).is_none());
    assert!(calculate_adx(&uptrend_candles(15), 14).is_some());
}
