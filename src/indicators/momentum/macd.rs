//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD line, signal line and histogram.
///
/// MACD = EMA(fast) - EMA(slow) over the full close series; the signal line
/// is the EMA(signal) of that MACD series.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if candles.len() < (slow_period + signal_period) as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_ema = math::ema(&closes, fast_period as usize);
    let slow_ema = math::ema(&closes, slow_period as usize);

    let macd_series: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_series = math::ema(&macd_series, signal_period as usize);

    let macd = math::last(&macd_series)?;
    let signal = math::last(&signal_series)?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with the default periods (12, 26, 9).
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
