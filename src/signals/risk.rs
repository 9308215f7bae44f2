//! Risk profiles, position sizing and timeframe-scaled exit distances.

use serde::{Deserialize, Serialize};

/// Share of capital put at risk per trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Standard,
    Aggressive,
}

impl RiskProfile {
    /// Percent of capital risked on one trade.
    pub fn risk_percent(self) -> f64 {
        match self {
            RiskProfile::Conservative => 0.5,
            RiskProfile::Standard => 1.0,
            RiskProfile::Aggressive => 2.0,
        }
    }

    /// Parse a profile name; anything unrecognized is `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "conservative" => RiskProfile::Conservative,
            "aggressive" => RiskProfile::Aggressive,
            _ => RiskProfile::Standard,
        }
    }
}

/// Capital at risk and the unit size that caps the stop-out loss at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSize {
    pub position_size: f64,
    pub risk_amount: f64,
}

/// Size a position so that a stop-out loses exactly the risked share of
/// capital. A zero stop distance yields a zero size; the risk amount is
/// still reported.
pub fn calculate_position_size(
    capital: f64,
    entry: f64,
    stop_loss: f64,
    risk_percent: f64,
) -> PositionSize {
    let risk_amount = capital * (risk_percent / 100.0);
    let stop_distance = (entry - stop_loss).abs();
    if stop_distance == 0.0 {
        return PositionSize {
            position_size: 0.0,
            risk_amount,
        };
    }
    PositionSize {
        position_size: risk_amount / stop_distance,
        risk_amount,
    }
}

/// ATR multipliers for the stop and the three-target ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitMultipliers {
    pub stop: f64,
    pub targets: [f64; 3],
}

/// Multipliers keyed by timeframe bucket. Unrecognized timeframes use the
/// default bucket rather than failing, so a batch over mixed subscriptions
/// never aborts on one odd label.
pub fn exit_multipliers(timeframe: &str) -> ExitMultipliers {
    match timeframe.to_ascii_lowercase().as_str() {
        "5m" | "5min" => ExitMultipliers {
            stop: 1.0,
            targets: [1.0, 1.5, 2.0],
        },
        "15m" | "15min" => ExitMultipliers {
            stop: 1.2,
            targets: [1.5, 2.0, 2.5],
        },
        "4h" | "4hr" => ExitMultipliers {
            stop: 1.5,
            targets: [2.0, 3.0, 4.0],
        },
        "24h" | "1d" | "daily" => ExitMultipliers {
            stop: 2.0,
            targets: [3.0, 4.0, 5.0],
        },
        _ => ExitMultipliers {
            stop: 1.0,
            targets: [1.0, 2.0, 3.0],
        },
    }
}
