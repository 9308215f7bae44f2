//! Series math primitives shared by the indicator library.
//!
//! Every function takes a plain `f64` slice and returns a series aligned
//! 1:1 with the input. Rolling windows emit `NaN` until enough values are
//! available; `last` filters those warmup values out.

/// Exponential moving average with smoothing factor `2 / (period + 1)`,
/// seeded from the first value.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    smooth(values, 2.0 / (period as f64 + 1.0))
}

/// Recursive exponential smoothing with an explicit alpha, seeded from the
/// first value.
pub fn smooth(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0.0;
    for (i, &v) in values.iter().enumerate() {
        prev = if i == 0 { v } else { alpha * v + (1.0 - alpha) * prev };
        out.push(prev);
    }
    out
}

/// Rolling mean over a trailing window.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        out[i] = window.iter().sum::<f64>() / period as f64;
    }
    out
}

/// Rolling sample standard deviation over a trailing window.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period < 2 {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
            / (period as f64 - 1.0);
        out[i] = variance.sqrt();
    }
    out
}

/// Rolling maximum over a trailing window.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        out[i] = values[i + 1 - period..=i]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
    }
    out
}

/// Rolling minimum over a trailing window.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        out[i] = values[i + 1 - period..=i]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
    }
    out
}

/// True range of one bar given the previous close, `high - low` for the
/// first bar of a series.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    match prev_close {
        Some(pc) => (high - low).max((high - pc).abs()).max((low - pc).abs()),
        None => high - low,
    }
}

/// Last value of a series, provided its warmup has completed.
pub fn last(series: &[f64]) -> Option<f64> {
    series.last().copied().filter(|v| v.is_finite())
}
