//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::AdxIndicator;

/// Calculate ADX with its directional indicators.
///
/// `+DM` counts an up-move only when it exceeds the down-move and is
/// positive, `-DM` mirrored. True range and both DM series are smoothed
/// exponentially over the period, normalized into `+DI`/`-DI`, and ADX is
/// the exponential smoothing of `|+DI - -DI| / (+DI + -DI) * 100`. Zero
/// denominators yield zero rather than an error.
pub fn calculate_adx(candles: &[Candle], period: u32) -> Option<AdxIndicator> {
    if candles.len() < period as usize + 1 {
        return None;
    }

    let mut tr = Vec::with_capacity(candles.len());
    let mut plus_dm = Vec::with_capacity(candles.len());
    let mut minus_dm = Vec::with_capacity(candles.len());

    for (i, candle) in candles.iter().enumerate() {
        let prev = if i == 0 { None } else { Some(&candles[i - 1]) };
        tr.push(math::true_range(
            candle.high,
            candle.low,
            prev.map(|p| p.close),
        ));

        let (up_move, down_move) = match prev {
            Some(p) => (candle.high - p.high, p.low - candle.low),
            None => (0.0, 0.0),
        };
        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    let tr_smooth = math::ema(&tr, period as usize);
    let plus_smooth = math::ema(&plus_dm, period as usize);
    let minus_smooth = math::ema(&minus_dm, period as usize);

    let mut dx = Vec::with_capacity(candles.len());
    let mut plus_di = 0.0;
    let mut minus_di = 0.0;
    for i in 0..candles.len() {
        (plus_di, minus_di) = if tr_smooth[i] > 0.0 {
            (
                100.0 * plus_smooth[i] / tr_smooth[i],
                100.0 * minus_smooth[i] / tr_smooth[i],
            )
        } else {
            (0.0, 0.0)
        };
        let di_sum = plus_di + minus_di;
        dx.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
    }

    let adx = math::ema(&dx, period as usize);
    let value = math::last(&adx)?;

    Some(AdxIndicator {
        value,
        plus_di,
        minus_di,
        period,
    })
}

/// Calculate ADX with the default period (14).
pub fn calculate_adx_default(candles: &[Candle]) -> Option<AdxIndicator> {
    calculate_adx(candles, 14)
}
