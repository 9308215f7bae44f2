//! Daily fan-out across a user's subscribed pairs.

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::models::signal::Signal;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{EvaluationRequest, SignalEngine};
use crate::signals::risk::RiskProfile;

/// One (symbol, timeframe) subscription entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedPair {
    pub symbol: String,
    pub timeframe: String,
}

impl SubscribedPair {
    pub fn new(symbol: &str, timeframe: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
        }
    }
}

/// Upper bound on signals returned per daily batch.
pub const MAX_DAILY_SIGNALS: usize = 3;

/// Evaluate every subscribed pair, drop holds, and return the top signals
/// by confidence.
///
/// Pair evaluations are independent; a failing pair is logged and skipped
/// and never aborts the batch.
pub async fn generate_daily_signals(
    provider: &dyn MarketDataProvider,
    pairs: &[SubscribedPair],
    capital: f64,
    risk_profile: RiskProfile,
    advanced_indicators: bool,
) -> Vec<Signal> {
    let evaluations = pairs.iter().map(|pair| async move {
        let candles = provider.fetch_candles(&pair.symbol, &pair.timeframe).await?;
        let request = EvaluationRequest {
            symbol: pair.symbol.clone(),
            timeframe: pair.timeframe.clone(),
            capital,
            risk_profile,
            advanced_indicators,
        };
        SignalEngine::evaluate(candles, &request)
    });

    let mut signals = Vec::new();
    for (pair, outcome) in pairs.iter().zip(join_all(evaluations).await) {
        match outcome {
            Ok(signal) if signal.is_hold() => {}
            Ok(signal) => signals.push(signal),
            Err(e) => {
                error!(
                    symbol = %pair.symbol,
                    timeframe = %pair.timeframe,
                    error = %e,
                    "signal evaluation failed for {}/{}: {}",
                    pair.symbol,
                    pair.timeframe,
                    e
                );
            }
        }
    }

    signals.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    signals.truncate(MAX_DAILY_SIGNALS);

    info!(
        pair_count = pairs.len(),
        signal_count = signals.len(),
        "daily batch evaluated {} pairs, returning {} signals",
        pairs.len(),
        signals.len()
    );
    signals
}
