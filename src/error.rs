//! Crate-wide error type.

use thiserror::Error;

use crate::entitlements::tier::Tier;

/// Errors surfaced by the engine and its entitlement gate.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The bar series is empty or too short, or the provider failed.
    /// Propagated to the caller, never replaced with zeros.
    #[error("market data unavailable: {0}")]
    DataUnavailable(String),

    /// The requested timeframe is outside the tier's allowed set.
    #[error("timeframe {timeframe} not available in {tier} tier")]
    TimeframeNotPermitted { timeframe: String, tier: Tier },

    /// A per-period allowance is exhausted.
    #[error("{scope} quota exceeded ({used}/{limit})")]
    QuotaExceeded {
        scope: &'static str,
        used: u32,
        limit: u32,
    },

    /// A free-tier caller is outside its daily access window.
    #[error("access window closed: {reason}")]
    OutsideAccessWindow { reason: String },
}
