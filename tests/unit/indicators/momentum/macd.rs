//! Unit tests for the MACD indicator

use tradewind::indicators::momentum::macd::{calculate_macd, calculate_macd_default};

use crate::support::{downtrend_candles, flat_candles, uptrend_candles};

#[test]
fn histogram_is_macd_minus_signal() {
    let macd = calculate_macd_default(&uptrend_candles(295)).unwrap();
    assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-12);
    assert_eq!(macd.period, Some((12, 26, 9)));
}

#[test]
fn sustained_uptrend_keeps_macd_above_signal() {
    let macd = calculate_macd_default(&uptrend_candles(295)).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.macd > macd.signal);
}

#[test]
fn sustained_downtrend_keeps_macd_below_signal() {
    let macd = calculate_macd_default(&downtrend_candles(295)).unwrap();
    assert!(macd.macd < 0.0);
    assert!(macd.macd < macd.signal);
}

#[test]
fn flat_market_collapses_to_zero() {
    let macd = calculate_macd_default(&flat_candles(300)).unwrap();
    assert!(macd.macd.abs() < 1e-9);
    assert!(macd.histogram.abs() < 1e-9);
}

#[test]
fn macd_requires_slow_plus_signal_bars() {
    assert!(calculate_macd(&uptrend_candles(34), 12, 26, 9).is_none());
    assert!(calculate_macd(&uptrend_candles(35), 12, 26, 9).is_some());
}
