//! The signal evaluation pipeline: preprocess, indicators, decision,
//! sizing.

use chrono::Utc;
use tracing::debug;

use crate::error::EngineError;
use crate::indicators::momentum::{macd, rsi, stochastic};
use crate::indicators::structure::fibonacci;
use crate::indicators::trend::{adx, ema, ichimoku};
use crate::indicators::volatility::{atr, bollinger, std_dev};
use crate::indicators::volume::{volume_ma, vwap};
use crate::models::candle::Candle;
use crate::models::indicators::{AdvancedSnapshot, IndicatorSnapshot};
use crate::models::signal::{Action, Signal, TradePlan};
use crate::signals::decision::{self, MarketView};
use crate::signals::preprocess;
use crate::signals::risk::{self, RiskProfile};

/// Bars required before an evaluation is meaningful; the slowest input is
/// the 200-period EMA.
pub const MIN_CANDLES: usize = 200;

const VOLUME_MA_PERIOD: u32 = 10;
const FIBONACCI_LOOKBACK: usize = 60;

/// Parameters for one evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub symbol: String,
    pub timeframe: String,
    pub capital: f64,
    pub risk_profile: RiskProfile,
    pub advanced_indicators: bool,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate one (symbol, timeframe) series end to end.
    ///
    /// Deterministic for a given series and request; the only
    /// non-reproducible field is the reported timestamp.
    pub fn evaluate(candles: Vec<Candle>, request: &EvaluationRequest) -> Result<Signal, EngineError> {
        let candles = preprocess::clean(candles)?;
        if candles.len() < MIN_CANDLES {
            return Err(EngineError::DataUnavailable(format!(
                "{} bars for {}/{}, need at least {}",
                candles.len(),
                request.symbol,
                request.timeframe,
                MIN_CANDLES
            )));
        }

        let missing =
            |what: &str| EngineError::DataUnavailable(format!("not enough bars to compute {what}"));

        let ema20 = ema::calculate_ema(&candles, 20).ok_or_else(|| missing("ema20"))?;
        let ema50 = ema::calculate_ema(&candles, 50).ok_or_else(|| missing("ema50"))?;
        let ema200 = ema::calculate_ema(&candles, 200).ok_or_else(|| missing("ema200"))?;
        let rsi14 = rsi::calculate_rsi_default(&candles).ok_or_else(|| missing("rsi"))?;
        let adx14 = adx::calculate_adx_default(&candles).ok_or_else(|| missing("adx"))?;
        let stoch =
            stochastic::calculate_stochastic_default(&candles).ok_or_else(|| missing("stochastic"))?;
        let atr14 = atr::calculate_atr_default(&candles).ok_or_else(|| missing("atr"))?;
        let bands = bollinger::calculate_bollinger_bands_default(&candles)
            .ok_or_else(|| missing("bollinger bands"))?;
        let deviation =
            std_dev::calculate_std_dev(&candles, 20).ok_or_else(|| missing("std dev"))?;
        let macd14 = macd::calculate_macd_default(&candles).ok_or_else(|| missing("macd"))?;
        let volume = volume_ma::calculate_volume_ma(&candles, VOLUME_MA_PERIOD)
            .ok_or_else(|| missing("volume average"))?;

        let entry = candles
            .last()
            .map(|c| c.close)
            .ok_or_else(|| missing("close"))?;

        let view = MarketView {
            close: entry,
            ema20: ema20.value,
            ema50: ema50.value,
            ema200: ema200.value,
            rsi: rsi14.value,
            adx: adx14.value,
            stoch_k: stoch.k,
            stoch_d: stoch.d,
            bollinger_sma: bands.middle,
            macd: macd14.macd,
            macd_signal: macd14.signal,
            volume: volume.volume,
            volume_ma: volume.volume_ma,
        };

        let action = decision::decide(&view);
        let confidence = decision::confidence(action, &view);

        let advanced = if request.advanced_indicators {
            let vwap14 = vwap::calculate_vwap(&candles).ok_or_else(|| missing("vwap"))?;
            let cloud =
                ichimoku::calculate_ichimoku(&candles).ok_or_else(|| missing("ichimoku"))?;
            let retracements = fibonacci::calculate_fibonacci(&candles, FIBONACCI_LOOKBACK)
                .ok_or_else(|| missing("fibonacci"))?;
            Some(AdvancedSnapshot {
                vwap: vwap14.value,
                ichimoku: cloud,
                fibonacci: retracements,
            })
        } else {
            None
        };

        let indicators = IndicatorSnapshot {
            rsi: rsi14.value,
            adx: adx14.value,
            stoch_k: stoch.k,
            stoch_d: stoch.d,
            atr: atr14.value,
            std_dev: deviation.value,
            macd: macd14.macd,
            macd_signal: macd14.signal,
            histogram: macd14.histogram,
            advanced,
        };

        let trade = match action {
            Action::Hold => None,
            Action::Buy | Action::Sell => {
                let multipliers = risk::exit_multipliers(&request.timeframe);
                let direction = if action == Action::Buy { 1.0 } else { -1.0 };
                let stop_loss = entry - direction * atr14.value * multipliers.stop;
                let take_profits = multipliers
                    .targets
                    .map(|m| entry + direction * atr14.value * m);
                let sizing = risk::calculate_position_size(
                    request.capital,
                    entry,
                    stop_loss,
                    request.risk_profile.risk_percent(),
                );
                Some(TradePlan {
                    stop_loss,
                    take_profits,
                    position_size: sizing.position_size,
                    risk_amount: sizing.risk_amount,
                })
            }
        };

        debug!(
            symbol = %request.symbol,
            timeframe = %request.timeframe,
            action = ?action,
            confidence,
            "evaluated {}/{}: {:?} (confidence {})",
            request.symbol,
            request.timeframe,
            action,
            confidence
        );

        Ok(Signal {
            symbol: request.symbol.clone(),
            timeframe: request.timeframe.clone(),
            action,
            entry,
            trade,
            confidence,
            indicators,
            timestamp: Utc::now(),
        })
    }
}
