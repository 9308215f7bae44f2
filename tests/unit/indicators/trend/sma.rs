//! Unit tests for the SMA indicator

use chrono::Utc;
use tradewind::indicators::trend::sma::calculate_sma;
use tradewind::models::candle::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&c| Candle::new(c, c + 0.1, c - 0.1, c, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn sma_is_the_trailing_window_mean() {
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0]);
    let sma = calculate_sma(&candles, 3).unwrap();
    assert!((sma.value - 3.0).abs() < 1e-12);
}

#[test]
fn sma_requires_enough_bars() {
    let candles = candles_from_closes(&[1.0, 2.0]);
    assert!(calculate_sma(&candles, 3).is_none());
}
