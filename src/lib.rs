//! Trading-signal generation engine.
//!
//! Converts a time-ordered OHLCV series into a directional trade
//! recommendation (buy/sell/hold) with a stop-loss, three take-profit
//! targets, a confidence score and a risk-bounded position size, gated by
//! the caller's subscription tier. The engine is a pure library-level
//! computation: market data and entitlements come in, a signal record goes
//! out, and nothing touches brokerage connectivity.

pub mod common;
pub mod config;
pub mod entitlements;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::EngineError;
