//! External collaborators and the gated request path built on them.

pub mod market_data;
pub mod signal_service;

pub use market_data::{MarketDataProvider, StaticMarketDataProvider};
pub use signal_service::{SignalRequest, SignalResult, SignalService};
