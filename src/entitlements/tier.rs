//! Subscription tiers and the capability envelope each one grants.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
    Premium,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Free => "free",
            Tier::Pro => "pro",
            Tier::Premium => "premium",
        };
        f.write_str(name)
    }
}

impl Tier {
    /// Parse a tier name; anything unrecognized maps to the free tier.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "pro" => Tier::Pro,
            "premium" => Tier::Premium,
            _ => Tier::Free,
        }
    }

    /// Capability table. Premium's unlimited custom signals replace the
    /// infinity sentinel the billing system uses.
    pub fn capabilities(self) -> TierCapabilities {
        match self {
            Tier::Free => TierCapabilities {
                allowed_timeframes: timeframe_set(&["1h", "4h", "1d"]),
                custom_signals_per_day: Quota::Limited(1),
                requests_per_hour: 10,
                advanced_indicators: false,
                portfolio_optimization: false,
                risk_analysis: false,
            },
            Tier::Pro => TierCapabilities {
                allowed_timeframes: timeframe_set(&["15m", "1h", "4h", "1d"]),
                custom_signals_per_day: Quota::Limited(5),
                requests_per_hour: 100,
                advanced_indicators: true,
                portfolio_optimization: false,
                risk_analysis: true,
            },
            Tier::Premium => TierCapabilities {
                allowed_timeframes: timeframe_set(&["5m", "15m", "1h", "4h", "1d"]),
                custom_signals_per_day: Quota::Unlimited,
                requests_per_hour: 500,
                advanced_indicators: true,
                portfolio_optimization: true,
                risk_analysis: true,
            },
        }
    }
}

fn timeframe_set(timeframes: &[&str]) -> BTreeSet<String> {
    timeframes.iter().map(|tf| tf.to_string()).collect()
}

/// A per-period allowance, either bounded or unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl Quota {
    /// Whether one more use fits inside the allowance.
    pub fn permits(self, used: u32) -> bool {
        match self {
            Quota::Limited(limit) => used < limit,
            Quota::Unlimited => true,
        }
    }

    /// Uses left, `None` when unlimited.
    pub fn remaining(self, used: u32) -> Option<u32> {
        match self {
            Quota::Limited(limit) => Some(limit.saturating_sub(used)),
            Quota::Unlimited => None,
        }
    }
}

/// What a tier may do: timeframes, quotas and feature flags. Lifecycle is
/// owned by the subscription system; the engine only reads it per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCapabilities {
    pub allowed_timeframes: BTreeSet<String>,
    pub custom_signals_per_day: Quota,
    pub requests_per_hour: u32,
    pub advanced_indicators: bool,
    pub portfolio_optimization: bool,
    pub risk_analysis: bool,
}

/// Daily access window for free-tier callers, e.g. "09:00-13:00".
///
/// Scheduling and validation of the window belong to the subscription
/// system; the engine only answers "may I run now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl AccessWindow {
    /// Parse an "HH:MM-HH:MM" window string.
    pub fn parse(value: &str) -> Option<Self> {
        let (start, end) = value.split_once('-')?;
        Some(Self {
            start: NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?,
            end: NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?,
        })
    }

    pub fn permits(&self, now: NaiveTime) -> bool {
        self.start <= now && now <= self.end
    }
}

/// The entitlement envelope reported back alongside a generated signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsSnapshot {
    pub tier: Tier,
    pub allowed_timeframes: BTreeSet<String>,
    /// Custom signals left today, `None` when unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_signals_remaining: Option<u32>,
    pub requests_per_hour: u32,
    pub advanced_indicators: bool,
    pub portfolio_optimization: bool,
    pub risk_analysis: bool,
}
