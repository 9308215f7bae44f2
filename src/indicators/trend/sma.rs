//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::SmaIndicator;

/// Calculate the rolling mean of the close series for a specific period.
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    if candles.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let series = math::rolling_mean(&closes, period as usize);
    let value = math::last(&series)?;

    Some(SmaIndicator { value, period })
}
