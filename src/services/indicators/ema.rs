//! Exponential moving average helper.

/// Calculate the EMA series for a sequence of values.
///
/// Seeded with the simple average of the first `period` values, then the
/// standard smoothing recurrence with `k = 2 / (period + 1)`. Returns an
/// empty vec when fewer than `period` values exist.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len() - period + 1);

    // First EMA is SMA
    let sma: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    ema.push(sma);

    for value in values.iter().skip(period) {
        let prev = *ema.last().unwrap();
        ema.push((value - prev) * multiplier + prev);
    }

    ema
}
