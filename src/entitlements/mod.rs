//! Subscription tiers and the gate that enforces them.

pub mod gate;
pub mod tier;

pub use gate::EntitlementGate;
pub use tier::{AccessWindow, PermissionsSnapshot, Quota, Tier, TierCapabilities};
