//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod signal;

pub use candle::Candle;
pub use indicators::{
    AdvancedSnapshot, AdxIndicator, AtrIndicator, BollingerBandsIndicator, EmaIndicator,
    FibonacciLevels, IchimokuIndicator, IndicatorSnapshot, MacdIndicator, RsiIndicator,
    SmaIndicator, StdDevIndicator, StochasticIndicator, VolumeIndicator, VwapIndicator,
};
pub use signal::{Action, Signal, TradePlan};
