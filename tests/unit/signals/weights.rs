//! Policy checks for the confidence weights
//!
//! The confidence score is a heuristic tally, not a probability; these
//! tests pin the policy so a weight change is a deliberate act.

use tradewind::signals::weights::ConfidenceWeights;

#[test]
fn full_agreement_reaches_exactly_the_cap() {
    assert_eq!(ConfidenceWeights::total(), 100);
    assert_eq!(ConfidenceWeights::total(), ConfidenceWeights::CAP);
}

#[test]
fn momentum_factors_outweigh_trend_distance_factors() {
    assert!(ConfidenceWeights::RSI_BIAS > ConfidenceWeights::EMA20_BIAS);
    assert!(ConfidenceWeights::STOCH_BIAS > ConfidenceWeights::EMA50_BIAS);
}
