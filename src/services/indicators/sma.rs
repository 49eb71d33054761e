//! Simple Moving Average (SMA) indicator.

/// SMA (Simple Moving Average) indicator.
///
/// Unweighted mean of the last `period` prices.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of samples required for calculation.
    pub fn min_periods(&self) -> usize {
        self.period
    }

    /// Calculate the SMA over the tail of the price sequence.
    /// Returns None with fewer than `period` prices.
    pub fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if self.period == 0 || prices.len() < self.period {
            return None;
        }

        let sum: f64 = prices.iter().rev().take(self.period).sum();
        Some(sum / self.period as f64)
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self { period: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_min_periods() {
        assert_eq!(Sma::new(10).min_periods(), 10);
        assert_eq!(Sma::default().min_periods(), 10);
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        assert!(sma.calculate(&[100.0, 101.0, 102.0, 103.0]).is_none());
    }

    #[test]
    fn test_sma_constant_series() {
        let sma = Sma::new(5);
        let prices = [42.5; 20];
        let result = sma.calculate(&prices).unwrap();
        assert!((result - 42.5).abs() < 1e-12);
    }

    #[test]
    fn test_sma_uses_most_recent_window() {
        let sma = Sma::new(3);
        let prices = [1.0, 1.0, 1.0, 10.0, 20.0, 30.0];
        let result = sma.calculate(&prices).unwrap();
        assert!((result - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_sma_rising_sequence() {
        // 13 samples rising by 2: 100, 102, ..., 124
        let prices: Vec<f64> = (0..13).map(|i| 100.0 + i as f64 * 2.0).collect();
        let sma = Sma::new(5);
        let result = sma.calculate(&prices).unwrap();
        // Last 5 prices: 116, 118, 120, 122, 124
        assert!((result - 120.0).abs() < 1e-12);
    }
}
