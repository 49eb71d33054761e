use serde::{Deserialize, Serialize};
use std::fmt;

/// A single timestamped BTC/USD price observation.
///
/// Immutable once created; the history store guarantees timestamps are
/// non-decreasing across stored samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Price in USD. Always positive.
    pub price: f64,
}

impl PriceSample {
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Indicator values computed over the current price history.
///
/// Fields are `None` when the history is shorter than the indicator's
/// minimum window. That is "not yet available", never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_line: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
}

/// Categorical market trend derived from an indicator snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Uptrend,
    Downtrend,
    Sideways,
    BullishCrossover,
    BearishCrossover,
    Unknown,
}

impl Trend {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uptrend => "Uptrend",
            Self::Downtrend => "Downtrend",
            Self::Sideways => "Sideways",
            Self::BullishCrossover => "Bullish Crossover",
            Self::BearishCrossover => "Bearish Crossover",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Full market snapshot returned by the market-data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub asset: String,
    pub current_price: f64,
    pub price_history: Vec<PriceSample>,
    pub trend: Trend,
    pub indicators: IndicatorSnapshot,
    pub sentiment: crate::types::SentimentReading,
    pub timestamp: i64,
}
