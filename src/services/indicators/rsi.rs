//! Relative Strength Index (RSI) indicator.

/// RSI (Relative Strength Index) indicator.
///
/// Momentum oscillator in [0, 100] comparing the magnitude of recent
/// gains to recent losses over `period` price deltas.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of samples required for calculation.
    /// One more than the period: deltas need a predecessor.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Calculate RSI over the price sequence.
    /// Returns None with fewer than `period + 1` prices.
    pub fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if self.period == 0 || prices.len() < self.min_periods() {
            return None;
        }

        let mut gains = Vec::with_capacity(prices.len() - 1);
        let mut losses = Vec::with_capacity(prices.len() - 1);

        for pair in prices.windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        // Initial averages over the first window, then Wilder smoothing
        let mut avg_gain: f64 = gains.iter().take(self.period).sum::<f64>() / self.period as f64;
        let mut avg_loss: f64 = losses.iter().take(self.period).sum::<f64>() / self.period as f64;

        for i in self.period..gains.len() {
            avg_gain = (avg_gain * (self.period - 1) as f64 + gains[i]) / self.period as f64;
            avg_loss = (avg_loss * (self.period - 1) as f64 + losses[i]) / self.period as f64;
        }

        // All-gain window: saturate instead of dividing by zero
        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some(100.0 - (100.0 / (1.0 + rs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn falling(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    #[test]
    fn test_rsi_min_periods() {
        assert_eq!(Rsi::default().min_periods(), 15);
        assert_eq!(Rsi::new(7).min_periods(), 8);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi = Rsi::default();
        assert!(rsi.calculate(&rising(14)).is_none());
        assert!(rsi.calculate(&rising(15)).is_some());
    }

    #[test]
    fn test_rsi_pure_gains_is_100() {
        let rsi = Rsi::default();
        let result = rsi.calculate(&rising(30)).unwrap();
        assert_eq!(result, 100.0);
    }

    #[test]
    fn test_rsi_pure_losses_is_0() {
        let rsi = Rsi::default();
        let result = rsi.calculate(&falling(30)).unwrap();
        assert!(result.abs() < 1e-9, "RSI on pure losses should be 0, got {result}");
    }

    #[test]
    fn test_rsi_within_bounds() {
        let rsi = Rsi::default();
        let prices: Vec<f64> = (0..60)
            .map(|i| 100.0 + ((i * 37) % 11) as f64 - 5.0)
            .collect();
        let result = rsi.calculate(&prices).unwrap();
        assert!((0.0..=100.0).contains(&result));
    }

    #[test]
    fn test_rsi_balanced_moves_near_50() {
        // Alternating equal up/down moves
        let mut prices = vec![100.0];
        for i in 0..40 {
            let last = *prices.last().unwrap();
            prices.push(if i % 2 == 0 { last + 1.0 } else { last - 1.0 });
        }
        let result = Rsi::default().calculate(&prices).unwrap();
        assert!((result - 50.0).abs() < 10.0, "expected near-neutral RSI, got {result}");
    }
}
