//! Signal pipeline: preprocessing, decision rules, risk sizing,
//! aggregation.

pub mod aggregation;
pub mod decision;
pub mod engine;
pub mod preprocess;
pub mod risk;
pub mod weights;

pub use aggregation::{generate_daily_signals, SubscribedPair, MAX_DAILY_SIGNALS};
pub use decision::MarketView;
pub use engine::{EvaluationRequest, SignalEngine, MIN_CANDLES};
pub use risk::{
    calculate_position_size, exit_multipliers, ExitMultipliers, PositionSize, RiskProfile,
};
pub use weights::ConfidenceWeights;
