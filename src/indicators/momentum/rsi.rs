//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::RsiIndicator;

/// Calculate Wilder-style RSI.
///
/// Per-bar gains and losses are each smoothed recursively with
/// `alpha = 1 / period`; `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`.
/// A series with no losses reads 100.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    if candles.len() < period as usize + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(candles.len() - 1);
    let mut losses = Vec::with_capacity(candles.len() - 1);
    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let alpha = 1.0 / period as f64;
    let avg_gain = math::last(&math::smooth(&gains, alpha))?;
    let avg_loss = math::last(&math::smooth(&losses, alpha))?;

    if avg_loss == 0.0 {
        return Some(RsiIndicator {
            value: 100.0,
            period,
        });
    }

    let rs = avg_gain / avg_loss;
    Some(RsiIndicator {
        value: 100.0 - 100.0 / (1.0 + rs),
        period,
    })
}

/// Calculate RSI with the default period (14).
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, 14)
}
