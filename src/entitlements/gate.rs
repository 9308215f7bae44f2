//! Fail-fast entitlement checks run before any indicator computation.

use chrono::NaiveTime;

use crate::entitlements::tier::{AccessWindow, Quota, Tier, TierCapabilities};
use crate::error::EngineError;

pub struct EntitlementGate;

impl EntitlementGate {
    /// Reject timeframes outside the tier's envelope before any data is
    /// fetched, and hand back the capabilities on success so the caller
    /// does not look them up twice.
    pub fn authorize_timeframe(
        tier: Tier,
        timeframe: &str,
    ) -> Result<TierCapabilities, EngineError> {
        let capabilities = tier.capabilities();
        if capabilities.allowed_timeframes.contains(timeframe) {
            Ok(capabilities)
        } else {
            Err(EngineError::TimeframeNotPermitted {
                timeframe: timeframe.to_string(),
                tier,
            })
        }
    }

    /// Custom-signal allowance; exhaustion is reported, never silently
    /// downgraded.
    pub fn check_signal_quota(tier: Tier, used_today: u32) -> Result<(), EngineError> {
        match tier.capabilities().custom_signals_per_day {
            quota if quota.permits(used_today) => Ok(()),
            Quota::Limited(limit) => Err(EngineError::QuotaExceeded {
                scope: "daily custom signal",
                used: used_today,
                limit,
            }),
            Quota::Unlimited => Ok(()),
        }
    }

    /// Hourly request allowance.
    pub fn check_request_quota(tier: Tier, used_this_hour: u32) -> Result<(), EngineError> {
        let limit = tier.capabilities().requests_per_hour;
        if used_this_hour < limit {
            Ok(())
        } else {
            Err(EngineError::QuotaExceeded {
                scope: "hourly request",
                used: used_this_hour,
                limit,
            })
        }
    }

    /// Free-tier "may I run now" check; pro and premium run around the
    /// clock. The window itself is scheduled by the subscription system.
    pub fn check_access_window(
        tier: Tier,
        window: Option<&AccessWindow>,
        now: NaiveTime,
    ) -> Result<(), EngineError> {
        if tier != Tier::Free {
            return Ok(());
        }
        match window {
            Some(window) if window.permits(now) => Ok(()),
            Some(window) => Err(EngineError::OutsideAccessWindow {
                reason: format!("next window starts at {}", window.start.format("%H:%M")),
            }),
            None => Err(EngineError::OutsideAccessWindow {
                reason: "daily access hours not set".to_string(),
            }),
        }
    }
}
