//! Confidence scoring policy.
//!
//! The confidence score is a heuristic tally of corroborating factors, not
//! a statistical probability. These weights are fixed policy constants
//! pinned by tests; changing one changes the product's behaviour.

pub struct ConfidenceWeights;

impl ConfidenceWeights {
    /// RSI on the action's side of 50.
    pub const RSI_BIAS: u8 = 20;
    /// %K on the action's side of 50.
    pub const STOCH_BIAS: u8 = 20;
    /// Close beyond the 20-period EMA.
    pub const EMA20_BIAS: u8 = 15;
    /// Close beyond the 50-period EMA.
    pub const EMA50_BIAS: u8 = 15;
    /// ADX above the trending threshold.
    pub const ADX_TRENDING: u8 = 10;
    /// ADX above the strong-trend threshold.
    pub const ADX_STRONG: u8 = 10;
    /// MACD line on the action's side of its signal line.
    pub const MACD_ALIGNMENT: u8 = 10;

    /// Hard ceiling regardless of how many factors fire.
    pub const CAP: u8 = 100;

    /// Maximum attainable score before the cap.
    pub const fn total() -> u8 {
        Self::RSI_BIAS
            + Self::STOCH_BIAS
            + Self::EMA20_BIAS
            + Self::EMA50_BIAS
            + Self::ADX_TRENDING
            + Self::ADX_STRONG
            + Self::MACD_ALIGNMENT
    }
}
