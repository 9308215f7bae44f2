//! Gated end-to-end signal generation: entitlements, fetch, evaluate.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entitlements::{AccessWindow, EntitlementGate, PermissionsSnapshot, Tier};
use crate::error::EngineError;
use crate::models::signal::Signal;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{EvaluationRequest, SignalEngine};
use crate::signals::risk::RiskProfile;

/// One caller request, including the usage counters tracked by the
/// surrounding subscription system.
#[derive(Debug, Clone)]
pub struct SignalRequest {
    pub symbol: String,
    pub timeframe: String,
    pub tier: Tier,
    pub capital: f64,
    pub risk_profile: RiskProfile,
    pub signals_used_today: u32,
    pub requests_this_hour: u32,
    /// Free-tier daily window plus the caller's local clock reading.
    pub access_window: Option<AccessWindow>,
    pub local_time: NaiveTime,
}

/// A signal plus the entitlement envelope it was generated under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub permissions: PermissionsSnapshot,
}

/// The path delivery surfaces call: every entitlement check runs before a
/// single bar is fetched.
pub struct SignalService<P> {
    provider: P,
}

impl<P: MarketDataProvider> SignalService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, request: &SignalRequest) -> Result<SignalResult, EngineError> {
        EntitlementGate::check_access_window(
            request.tier,
            request.access_window.as_ref(),
            request.local_time,
        )?;
        let capabilities = EntitlementGate::authorize_timeframe(request.tier, &request.timeframe)?;
        EntitlementGate::check_signal_quota(request.tier, request.signals_used_today)?;
        EntitlementGate::check_request_quota(request.tier, request.requests_this_hour)?;

        let candles = self
            .provider
            .fetch_candles(&request.symbol, &request.timeframe)
            .await?;

        let evaluation = EvaluationRequest {
            symbol: request.symbol.clone(),
            timeframe: request.timeframe.clone(),
            capital: request.capital,
            risk_profile: request.risk_profile,
            advanced_indicators: capabilities.advanced_indicators,
        };
        let signal = SignalEngine::evaluate(candles, &evaluation)?;

        info!(
            symbol = %signal.symbol,
            timeframe = %signal.timeframe,
            tier = %request.tier,
            action = ?signal.action,
            confidence = signal.confidence,
            "generated {:?} signal for {}/{} (confidence {})",
            signal.action,
            signal.symbol,
            signal.timeframe,
            signal.confidence
        );

        let permissions = PermissionsSnapshot {
            tier: request.tier,
            custom_signals_remaining: capabilities
                .custom_signals_per_day
                .remaining(request.signals_used_today + 1),
            allowed_timeframes: capabilities.allowed_timeframes,
            requests_per_hour: capabilities.requests_per_hour,
            advanced_indicators: capabilities.advanced_indicators,
            portfolio_optimization: capabilities.portfolio_optimization,
            risk_analysis: capabilities.risk_analysis,
        };

        Ok(SignalResult {
            signal,
            permissions,
        })
    }
}
