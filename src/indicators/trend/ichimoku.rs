//! Ichimoku cloud lines (advanced indicator set)

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::IchimokuIndicator;

const TENKAN_PERIOD: usize = 9;
const KIJUN_PERIOD: usize = 26;
const SENKOU_B_PERIOD: usize = 52;

/// Calculate the four Ichimoku lines from rolling high/low midpoints.
pub fn calculate_ichimoku(candles: &[Candle]) -> Option<IchimokuIndicator> {
    if candles.len() < SENKOU_B_PERIOD {
        return None;
    }

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let midpoint = |period: usize| -> Option<f64> {
        let high = math::last(&math::rolling_max(&highs, period))?;
        let low = math::last(&math::rolling_min(&lows, period))?;
        Some((high + low) / 2.0)
    };

    let tenkan = midpoint(TENKAN_PERIOD)?;
    let kijun = midpoint(KIJUN_PERIOD)?;
    let senkou_a = (tenkan + kijun) / 2.0;
    let senkou_b = midpoint(SENKOU_B_PERIOD)?;

    Some(IchimokuIndicator {
        tenkan,
        kijun,
        senkou_a,
        senkou_b,
    })
}
