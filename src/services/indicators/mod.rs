//! Technical indicator implementations.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use sma::Sma;

use crate::config::Config;
use crate::types::IndicatorSnapshot;

/// Computes a full indicator snapshot from an ordered price sequence.
///
/// Stateless: every call recomputes from scratch over the prices it is
/// given. Fields whose minimum window is not yet met come back None.
pub struct IndicatorEngine {
    sma: Sma,
    sma_long: Sma,
    rsi: Rsi,
    macd: Macd,
}

impl IndicatorEngine {
    pub fn new(sma_period: usize, sma_long_period: usize, rsi_period: usize) -> Self {
        Self {
            sma: Sma::new(sma_period),
            sma_long: Sma::new(sma_long_period),
            rsi: Rsi::new(rsi_period),
            macd: Macd::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sma_period, config.sma_long_period, config.rsi_period)
    }

    /// Compute all indicators over prices ordered oldest to newest.
    pub fn snapshot(&self, prices: &[f64]) -> IndicatorSnapshot {
        let macd = self.macd.calculate(prices);

        IndicatorSnapshot {
            sma: self.sma.calculate(prices),
            sma_long: self.sma_long.calculate(prices),
            rsi: self.rsi.calculate(prices),
            macd_line: macd.map(|m| m.line),
            macd_signal: macd.map(|m| m.signal),
            macd_histogram: macd.map(|m| m.histogram),
        }
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(10, 30, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_empty_history() {
        let engine = IndicatorEngine::default();
        let snapshot = engine.snapshot(&[]);
        assert_eq!(snapshot, IndicatorSnapshot::default());
    }

    #[test]
    fn test_snapshot_partial_availability() {
        let engine = IndicatorEngine::default();
        // 13 samples: SMA(10) defined, RSI(14) and MACD not yet
        let prices: Vec<f64> = (0..13).map(|i| 100.0 + i as f64 * 2.0).collect();
        let snapshot = engine.snapshot(&prices);

        assert!(snapshot.sma.is_some());
        assert!(snapshot.sma_long.is_none());
        assert!(snapshot.rsi.is_none());
        assert!(snapshot.macd_line.is_none());
        assert!(snapshot.macd_signal.is_none());
        assert!(snapshot.macd_histogram.is_none());
    }

    #[test]
    fn test_snapshot_full_availability() {
        let engine = IndicatorEngine::default();
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.7).cos() * 5.0).collect();
        let snapshot = engine.snapshot(&prices);

        assert!(snapshot.sma.is_some());
        assert!(snapshot.sma_long.is_some());
        assert!(snapshot.rsi.is_some());
        let line = snapshot.macd_line.unwrap();
        let signal = snapshot.macd_signal.unwrap();
        let histogram = snapshot.macd_histogram.unwrap();
        assert!((histogram - (line - signal)).abs() < 1e-12);
    }
}
