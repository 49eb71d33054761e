//! Analysis pipeline facade.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::indicators::IndicatorEngine;
use crate::services::sentiment::SentimentProvider;
use crate::services::{trade_idea, trend, PriceHistory};
use crate::types::{IndicatorSnapshot, MarketData, TradeIdea};
use std::sync::{Arc, RwLock};

/// Composes the history store, indicator engine, trend classifier,
/// sentiment provider, and trade-idea generator into the per-request
/// analysis pipeline.
///
/// Retains the previous indicator snapshot between evaluations so the
/// classifier can detect MACD crossovers.
pub struct AnalysisService {
    asset: String,
    history: Arc<PriceHistory>,
    engine: IndicatorEngine,
    sentiment: Box<dyn SentimentProvider>,
    previous: RwLock<Option<IndicatorSnapshot>>,
}

impl AnalysisService {
    pub fn new(
        asset: impl Into<String>,
        history: Arc<PriceHistory>,
        engine: IndicatorEngine,
        sentiment: Box<dyn SentimentProvider>,
    ) -> Self {
        Self {
            asset: asset.into(),
            history,
            engine,
            sentiment,
            previous: RwLock::new(None),
        }
    }

    pub fn from_config(
        config: &Config,
        history: Arc<PriceHistory>,
        sentiment: Box<dyn SentimentProvider>,
    ) -> Self {
        Self::new(
            "BTC/USD",
            history,
            IndicatorEngine::from_config(config),
            sentiment,
        )
    }

    /// Shared handle to the price history this service reads from.
    pub fn history(&self) -> Arc<PriceHistory> {
        self.history.clone()
    }

    /// Build a full market snapshot from the current history.
    ///
    /// Indicators below their minimum window come back unset; only a
    /// completely empty history is an error.
    pub fn market_data(&self) -> Result<MarketData> {
        let samples = self.history.snapshot();
        let latest = samples
            .last()
            .copied()
            .ok_or_else(|| AppError::NotFound("no price data yet".to_string()))?;

        let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
        let snapshot = self.engine.snapshot(&prices);

        let trend = {
            let previous = self.previous.read().unwrap();
            trend::classify(&snapshot, previous.as_ref(), latest.price)
        };
        *self.previous.write().unwrap() = Some(snapshot);

        Ok(MarketData {
            asset: self.asset.clone(),
            current_price: latest.price,
            price_history: samples,
            trend,
            indicators: snapshot,
            sentiment: self.sentiment.reading(),
            timestamp: chrono::Utc::now().timestamp(),
        })
    }

    /// Derive a trade idea from a fresh market snapshot.
    pub fn trade_idea(&self) -> Result<TradeIdea> {
        let market = self.market_data()?;
        Ok(trade_idea::generate(
            &self.asset,
            market.current_price,
            market.trend,
            &market.sentiment,
        ))
    }
}
