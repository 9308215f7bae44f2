//! Signal output models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorSnapshot;

/// Trade direction recommended by the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

/// Stop, target ladder and sizing for a non-hold signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub stop_loss: f64,
    /// Three ascending (buy) or descending (sell) exit prices.
    pub take_profits: [f64; 3],
    pub position_size: f64,
    pub risk_amount: f64,
}

/// A trade recommendation for one (symbol, timeframe) pair.
///
/// The hold invariant is structural: a hold signal carries no `TradePlan`,
/// so it can never expose a stop, targets or a position size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub timeframe: String,
    pub action: Action,
    /// Close price at evaluation time.
    pub entry: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade: Option<TradePlan>,
    /// Heuristic confirmation score in [0, 100].
    pub confidence: u8,
    pub indicators: IndicatorSnapshot,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    pub fn is_hold(&self) -> bool {
        self.action == Action::Hold
    }

    /// Stop price, or 0.0 for hold signals.
    pub fn stop_loss(&self) -> f64 {
        self.trade.as_ref().map(|t| t.stop_loss).unwrap_or(0.0)
    }

    /// Take-profit ladder, empty for hold signals.
    pub fn take_profits(&self) -> &[f64] {
        self.trade
            .as_ref()
            .map(|t| t.take_profits.as_slice())
            .unwrap_or(&[])
    }
}
