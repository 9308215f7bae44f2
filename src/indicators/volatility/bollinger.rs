//! Bollinger Bands indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::BollingerBandsIndicator;

/// Calculate Bollinger Bands.
///
/// Middle band is the rolling mean of the close; upper and lower bands sit
/// `std_dev` sample standard deviations away.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if candles.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::last(&math::rolling_mean(&closes, period as usize))?;
    let deviation = math::last(&math::rolling_std(&closes, period as usize))?;

    Some(BollingerBandsIndicator {
        upper: middle + std_dev * deviation,
        middle,
        lower: middle - std_dev * deviation,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with the default parameters (20 SMA, 2 sigma).
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
