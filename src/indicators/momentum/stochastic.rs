//! Stochastic Oscillator indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::StochasticIndicator;

/// Calculate smoothed %K and %D.
///
/// Raw `%K = 100 * (close - min(low)) / (max(high) - min(low))` over the
/// lookback period, smoothed by a rolling mean over `k_smooth`; `%D` is a
/// further rolling mean of `%K` over `d_smooth`. A window with zero range
/// reads a neutral 50.
pub fn calculate_stochastic(
    candles: &[Candle],
    period: u32,
    k_smooth: u32,
    d_smooth: u32,
) -> Option<StochasticIndicator> {
    let lookback = period as usize;
    if candles.len() < lookback + (k_smooth + d_smooth) as usize {
        return None;
    }

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let highest = math::rolling_max(&highs, lookback);
    let lowest = math::rolling_min(&lows, lookback);

    let raw_k: Vec<f64> = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            let range = highest[i] - lowest[i];
            if range == 0.0 {
                50.0
            } else {
                100.0 * (candle.close - lowest[i]) / range
            }
        })
        .collect();

    let k_series = math::rolling_mean(&raw_k, k_smooth as usize);
    let d_series = math::rolling_mean(&k_series, d_smooth as usize);

    Some(StochasticIndicator {
        k: math::last(&k_series)?,
        d: math::last(&d_series)?,
        period,
        k_smooth,
        d_smooth,
    })
}

/// Calculate the stochastic oscillator with the default (14, 3, 3) setup.
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3, 3)
}
