//! OHLC series cleaning applied before any indicator computation.

use crate::error::EngineError;
use crate::models::candle::Candle;

/// Replace exact-zero OHLC values with the nearest known value.
///
/// Zeros become gaps, gaps fill forward with the last known value, and any
/// leading gaps fill backward from the first known value. Volume is never
/// altered and the output length equals the input length. An empty series,
/// or a column with no usable value at all, is `DataUnavailable`.
pub fn clean(mut candles: Vec<Candle>) -> Result<Vec<Candle>, EngineError> {
    if candles.is_empty() {
        return Err(EngineError::DataUnavailable("empty bar series".to_string()));
    }

    clean_column(&mut candles, "open", |c| c.open, |c, v| c.open = v)?;
    clean_column(&mut candles, "high", |c| c.high, |c, v| c.high = v)?;
    clean_column(&mut candles, "low", |c| c.low, |c, v| c.low = v)?;
    clean_column(&mut candles, "close", |c| c.close, |c, v| c.close = v)?;

    Ok(candles)
}

fn clean_column<G, S>(
    candles: &mut [Candle],
    name: &str,
    get: G,
    set: S,
) -> Result<(), EngineError>
where
    G: Fn(&Candle) -> f64,
    S: Fn(&mut Candle, f64),
{
    let mut column: Vec<Option<f64>> = candles
        .iter()
        .map(|c| {
            let value = get(c);
            (value != 0.0).then_some(value)
        })
        .collect();

    let mut carried = None;
    for value in column.iter_mut() {
        match *value {
            Some(v) => carried = Some(v),
            None => *value = carried,
        }
    }
    carried = None;
    for value in column.iter_mut().rev() {
        match *value {
            Some(v) => carried = Some(v),
            None => *value = carried,
        }
    }

    for (candle, value) in candles.iter_mut().zip(column) {
        match value {
            Some(v) => set(candle, v),
            None => {
                return Err(EngineError::DataUnavailable(format!(
                    "{name} column has no usable values"
                )))
            }
        }
    }
    Ok(())
}
