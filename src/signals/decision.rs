//! Multi-indicator confirmation rules and confidence scoring.

use crate::models::signal::Action;
use crate::signals::weights::ConfidenceWeights;

/// ADX level above which a market counts as trending.
pub const ADX_TREND_THRESHOLD: f64 = 25.0;
/// ADX level above which the trend counts as strong.
pub const ADX_STRONG_THRESHOLD: f64 = 40.0;

const RSI_BAND: (f64, f64) = (30.0, 70.0);
const STOCH_BAND: (f64, f64) = (20.0, 80.0);

/// Last-bar readings the decision rules operate on.
#[derive(Debug, Clone, Copy)]
pub struct MarketView {
    pub close: f64,
    pub ema20: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub rsi: f64,
    pub adx: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub bollinger_sma: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub volume: f64,
    pub volume_ma: f64,
}

impl MarketView {
    /// Momentum oscillators inside their actionable bands, shared by both
    /// directions: exhausted markets (RSI or %K pinned at an extreme) are
    /// not entered.
    fn momentum_in_band(&self) -> bool {
        self.rsi > RSI_BAND.0
            && self.rsi < RSI_BAND.1
            && self.stoch_k > STOCH_BAND.0
            && self.stoch_k < STOCH_BAND.1
    }

    /// Full buy confirmation: stacked EMAs under the close, bounded
    /// momentum with a rising stochastic, a trending ADX, price above the
    /// band mean, MACD above its signal line and volume above its average.
    pub fn buy_confirmed(&self) -> bool {
        self.close > self.ema20
            && self.ema20 > self.ema50
            && self.ema50 > self.ema200
            && self.momentum_in_band()
            && self.stoch_k > self.stoch_d
            && self.adx > ADX_TREND_THRESHOLD
            && self.close > self.bollinger_sma
            && self.macd > self.macd_signal
            && self.volume > self.volume_ma
    }

    /// Strict mirror of the buy confirmation.
    pub fn sell_confirmed(&self) -> bool {
        self.close < self.ema20
            && self.ema20 < self.ema50
            && self.ema50 < self.ema200
            && self.momentum_in_band()
            && self.stoch_k < self.stoch_d
            && self.adx > ADX_TREND_THRESHOLD
            && self.close < self.bollinger_sma
            && self.macd < self.macd_signal
            && self.volume > self.volume_ma
    }
}

/// Classify the latest bar. Both condition sets are evaluated; input that
/// somehow satisfies both is treated as undecidable and held.
pub fn decide(view: &MarketView) -> Action {
    match (view.buy_confirmed(), view.sell_confirmed()) {
        (true, false) => Action::Buy,
        (false, true) => Action::Sell,
        _ => Action::Hold,
    }
}

/// Tally corroborating factors for the chosen action, capped at 100.
/// Hold always scores zero.
pub fn confidence(action: Action, view: &MarketView) -> u8 {
    let mut score: u32 = 0;

    match action {
        Action::Hold => return 0,
        Action::Buy => {
            if view.rsi > 50.0 {
                score += ConfidenceWeights::RSI_BIAS as u32;
            }
            if view.stoch_k > 50.0 {
                score += ConfidenceWeights::STOCH_BIAS as u32;
            }
            if view.close > view.ema20 {
                score += ConfidenceWeights::EMA20_BIAS as u32;
            }
            if view.close > view.ema50 {
                score += ConfidenceWeights::EMA50_BIAS as u32;
            }
            if view.macd > view.macd_signal {
                score += ConfidenceWeights::MACD_ALIGNMENT as u32;
            }
        }
        Action::Sell => {
            if view.rsi < 50.0 {
                score += ConfidenceWeights::RSI_BIAS as u32;
            }
            if view.stoch_k < 50.0 {
                score += ConfidenceWeights::STOCH_BIAS as u32;
            }
            if view.close < view.ema20 {
                score += ConfidenceWeights::EMA20_BIAS as u32;
            }
            if view.close < view.ema50 {
                score += ConfidenceWeights::EMA50_BIAS as u32;
            }
            if view.macd < view.macd_signal {
                score += ConfidenceWeights::MACD_ALIGNMENT as u32;
            }
        }
    }

    if view.adx > ADX_TREND_THRESHOLD {
        score += ConfidenceWeights::ADX_TRENDING as u32;
    }
    if view.adx > ADX_STRONG_THRESHOLD {
        score += ConfidenceWeights::ADX_STRONG as u32;
    }

    score.min(ConfidenceWeights::CAP as u32) as u8
}
