//! Demo binary: evaluate a few synthetic series and print the daily batch.

use chrono::{Duration, Utc};
use tradewind::models::candle::Candle;
use tradewind::services::StaticMarketDataProvider;
use tradewind::signals::{generate_daily_signals, RiskProfile, SubscribedPair};

/// Symmetric triangle wave in [-amplitude, amplitude].
fn triangle(step: usize, period: usize, amplitude: f64) -> f64 {
    let t = step % period;
    let half = period as f64 / 2.0;
    if (t as f64) < half {
        -amplitude + 2.0 * amplitude * (t as f64 / half)
    } else {
        amplitude - 2.0 * amplitude * ((t as f64 - half) / half)
    }
}

/// Deterministic series: linear drift plus a triangle-wave swing, with
/// steadily rising volume.
fn synthetic_series(bars: usize, start: f64, drift: f64, amplitude: f64) -> Vec<Candle> {
    let origin = Utc::now() - Duration::hours(bars as i64);
    let mut candles = Vec::with_capacity(bars);
    let mut prev_close: Option<f64> = None;
    for i in 0..bars {
        let close = start + drift * i as f64 + triangle(i, 16, amplitude);
        let open = prev_close.unwrap_or(close);
        let candle = Candle::new(
            open,
            open.max(close) + 0.25,
            open.min(close) - 0.25,
            close,
            1000.0 + 5.0 * i as f64,
            origin + Duration::hours(i as i64),
        );
        prev_close = Some(close);
        candles.push(candle);
    }
    candles
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tradewind::logging::init_logging();

    let provider = StaticMarketDataProvider::new()
        .with_series("EURUSD", "1h", synthetic_series(295, 100.0, 0.08, 3.0))
        .with_series("GBPUSD", "4h", synthetic_series(295, 150.0, -0.08, -3.0))
        .with_series("USDJPY", "1d", synthetic_series(295, 120.0, 0.0, 0.0));

    // XAUUSD has no data on purpose: the batch logs the failure and moves on.
    let pairs = vec![
        SubscribedPair::new("EURUSD", "1h"),
        SubscribedPair::new("GBPUSD", "4h"),
        SubscribedPair::new("USDJPY", "1d"),
        SubscribedPair::new("XAUUSD", "1h"),
    ];

    let signals =
        generate_daily_signals(&provider, &pairs, 10_000.0, RiskProfile::Standard, false).await;

    for signal in &signals {
        println!("{}", serde_json::to_string_pretty(signal)?);
    }
    Ok(())
}
