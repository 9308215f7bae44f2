//! Market data provider interface.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::candle::Candle;

/// Source of historical bars for a (symbol, timeframe) pair.
///
/// Implemented by the surrounding service against whatever exchange or
/// vendor it uses; the engine only sees bars or `DataUnavailable`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch bars ordered oldest to newest.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<Vec<Candle>, EngineError>;
}

/// Fixed in-memory provider backing tests and the demo binary.
#[derive(Debug, Default)]
pub struct StaticMarketDataProvider {
    series: HashMap<(String, String), Vec<Candle>>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, timeframe: &str, candles: Vec<Candle>) -> Self {
        self.series
            .insert((symbol.to_string(), timeframe.to_string()), candles);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<Vec<Candle>, EngineError> {
        self.series
            .get(&(symbol.to_string(), timeframe.to_string()))
            .cloned()
            .ok_or_else(|| {
                EngineError::DataUnavailable(format!("no market data for {symbol}/{timeframe}"))
            })
    }
}
