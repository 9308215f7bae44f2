//! Volume and its rolling average

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::VolumeIndicator;

/// Pair the latest volume with its rolling average, used as the
/// participation check in the decision rules.
pub fn calculate_volume_ma(candles: &[Candle], period: u32) -> Option<VolumeIndicator> {
    if candles.len() < period as usize {
        return None;
    }

    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let volume_ma = math::last(&math::rolling_mean(&volumes, period as usize))?;
    let volume = *volumes.last()?;

    Some(VolumeIndicator {
        volume,
        volume_ma,
        period,
    })
}
