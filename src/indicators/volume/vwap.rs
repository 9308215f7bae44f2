//! VWAP (Volume-Weighted Average Price) indicator (advanced set)

use crate::models::candle::Candle;
use crate::models::indicators::VwapIndicator;

/// Calculate cumulative VWAP over the whole series: the sum of typical
/// price times volume, divided by total volume. A series with no traded
/// volume has no VWAP.
pub fn calculate_vwap(candles: &[Candle]) -> Option<VwapIndicator> {
    if candles.is_empty() {
        return None;
    }

    let mut weighted_sum = 0.0;
    let mut volume_sum = 0.0;
    for candle in candles {
        let typical = (candle.high + candle.low + candle.close) / 3.0;
        weighted_sum += typical * candle.volume;
        volume_sum += candle.volume;
    }

    if volume_sum == 0.0 {
        return None;
    }

    Some(VwapIndicator {
        value: weighted_sum / volume_sum,
    })
}
