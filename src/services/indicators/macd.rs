//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema_series;

/// Computed MACD values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdOutput {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD indicator.
///
/// - MACD line = EMA(fast) - EMA(slow)
/// - Signal line = EMA(signal_period) of the MACD line
/// - Histogram = MACD line - signal line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    /// Minimum number of samples before all three outputs are defined.
    pub fn min_periods(&self) -> usize {
        self.slow_period + self.signal_period
    }

    /// Calculate MACD values over the price sequence.
    /// Returns None until `slow + signal` prices exist.
    pub fn calculate(&self, prices: &[f64]) -> Option<MacdOutput> {
        if prices.len() < self.min_periods() {
            return None;
        }

        let fast_ema = ema_series(prices, self.fast_period);
        let slow_ema = ema_series(prices, self.slow_period);

        if fast_ema.is_empty() || slow_ema.is_empty() {
            return None;
        }

        // Align the EMAs (fast starts earlier)
        let offset = self.slow_period - self.fast_period;
        let macd_line: Vec<f64> = fast_ema
            .iter()
            .skip(offset)
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        if macd_line.len() < self.signal_period {
            return None;
        }

        let signal_line = ema_series(&macd_line, self.signal_period);
        let signal = *signal_line.last()?;
        let line = *macd_line.last()?;

        Some(MacdOutput {
            line,
            signal,
            histogram: line - signal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macd_min_periods() {
        assert_eq!(Macd::default().min_periods(), 35);
        assert_eq!(Macd::new(5, 10, 3).min_periods(), 13);
    }

    #[test]
    fn test_macd_insufficient_data() {
        let macd = Macd::default();
        let prices: Vec<f64> = (0..34).map(|i| 100.0 + i as f64).collect();
        assert!(macd.calculate(&prices).is_none());

        let prices: Vec<f64> = (0..35).map(|i| 100.0 + i as f64).collect();
        assert!(macd.calculate(&prices).is_some());
    }

    #[test]
    fn test_macd_histogram_identity() {
        let macd = Macd::default();
        let prices: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 10.0 + i as f64 * 0.2)
            .collect();
        let output = macd.calculate(&prices).unwrap();
        assert!((output.histogram - (output.line - output.signal)).abs() < 1e-12);
    }

    #[test]
    fn test_macd_constant_series_is_zero() {
        let macd = Macd::default();
        let prices = [100.0; 60];
        let output = macd.calculate(&prices).unwrap();
        assert!(output.line.abs() < 1e-9);
        assert!(output.signal.abs() < 1e-9);
        assert!(output.histogram.abs() < 1e-9);
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let macd = Macd::default();
        let prices: Vec<f64> = (0..60).map(|i| 100.0 * (1.01f64).powi(i)).collect();
        let output = macd.calculate(&prices).unwrap();
        assert!(output.line > 0.0, "fast EMA should lead slow EMA upward, got {}", output.line);
    }

    #[test]
    fn test_macd_negative_in_downtrend() {
        let macd = Macd::default();
        let prices: Vec<f64> = (0..60).map(|i| 200.0 * (0.99f64).powi(i)).collect();
        let output = macd.calculate(&prices).unwrap();
        assert!(output.line < 0.0);
    }
}
