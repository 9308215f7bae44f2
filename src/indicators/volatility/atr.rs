//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::AtrIndicator;

/// Calculate ATR as the rolling mean of the true range.
///
/// The first bar's true range is `high - low` since it has no previous
/// close.
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrIndicator> {
    if candles.len() < period as usize + 1 {
        return None;
    }

    let tr: Vec<f64> = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            let prev_close = if i == 0 {
                None
            } else {
                Some(candles[i - 1].close)
            };
            math::true_range(candle.high, candle.low, prev_close)
        })
        .collect();

    let series = math::rolling_mean(&tr, period as usize);
    let value = math::last(&series)?;

    Some(AtrIndicator { value, period })
}

/// Calculate ATR with the default period (14).
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrIndicator> {
    calculate_atr(candles, 14)
}
