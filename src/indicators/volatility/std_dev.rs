//! Rolling standard deviation of the close

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::StdDevIndicator;

/// Calculate the rolling sample standard deviation of the close series.
pub fn calculate_std_dev(candles: &[Candle], period: u32) -> Option<StdDevIndicator> {
    if candles.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let series = math::rolling_std(&closes, period as usize);
    let value = math::last(&series)?;

    Some(StdDevIndicator { value, period })
}
