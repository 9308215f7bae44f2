//! Unit tests for the stochastic oscillator

use chrono::Utc;
use tradewind::indicators::momentum::stochastic::{
    calculate_stochastic, calculate_stochastic_default,
};
use tradewind::models::candle::Candle;

use crate::support::flat_candles;

#[test]
fn zero_range_window_reads_neutral() {
    let stoch = calculate_stochastic_default(&flat_candles(100)).unwrap();
    assert_eq!(stoch.k, 50.0);
    assert_eq!(stoch.d, 50.0);
}

#[test]
fn close_at_window_top_reads_high() {
    let candles: Vec<Candle> = (0..100)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(close - 1.0, close + 0.25, close - 1.25, close, 1000.0, Utc::now())
        })
        .collect();
    let stoch = calculate_stochastic_default(&candles).unwrap();
    assert!(stoch.k > 80.0, "expected %K near the top, got {}", stoch.k);
    assert!(stoch.k >= stoch.d);
}

#[test]
fn both_lines_stay_in_bounds() {
    let stoch = calculate_stochastic_default(&crate::support::uptrend_candles(295)).unwrap();
    assert!((0.0..=100.0).contains(&stoch.k));
    assert!((0.0..=100.0).contains(&stoch.d));
}

#[test]
fn stochastic_requires_warmup_bars() {
    assert!(calculate_stochastic(&flat_candles(19), 14, 3, 3).is_none());
    assert!(calculate_stochastic(&flat_candles(20), 14, 3, 3).is_some());
}
