//! Fibonacci retracement levels (advanced set)

use crate::models::candle::Candle;
use crate::models::indicators::FibonacciLevels;

/// Retracement ratios measured down from the lookback high.
pub const RETRACEMENT_RATIOS: [f64; 5] = [0.236, 0.382, 0.5, 0.618, 0.786];

/// Calculate retracement prices over the trailing lookback window.
pub fn calculate_fibonacci(candles: &[Candle], lookback: usize) -> Option<FibonacciLevels> {
    if candles.is_empty() || lookback == 0 {
        return None;
    }

    let window = &candles[candles.len().saturating_sub(lookback)..];
    let high = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let range = high - low;

    Some(FibonacciLevels {
        high,
        low,
        levels: RETRACEMENT_RATIOS.map(|ratio| high - range * ratio),
    })
}
