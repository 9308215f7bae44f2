//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::EmaIndicator;

/// Calculate the EMA of the close series for a specific period.
///
/// Smoothing factor is `2 / (period + 1)`, seeded from the first close with
/// no bias adjustment.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    if candles.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let series = math::ema(&closes, period as usize);
    let value = math::last(&series)?;

    Some(EmaIndicator { value, period })
}

/// Calculate multiple EMAs at once.
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<EmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(candles, period))
        .collect()
}
