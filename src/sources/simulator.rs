//! Synthetic BTC/USD tick producer.

use crate::services::PriceHistory;
use crate::types::PriceSample;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

const INITIAL_PRICE: f64 = 65_000.0;
const PRICE_FLOOR: f64 = 10_000.0;
const DRIFT_FACTORS: &[f64] = &[-0.0002, -0.0001, 0.0, 0.0001, 0.0002, 0.0003];

/// Random-walk price simulator.
///
/// Each tick moves the last known price by a uniform shock plus a small
/// drift, floored so the walk cannot collapse to nonsense.
pub struct PriceSimulator {
    history: Arc<PriceHistory>,
    interval_secs: u64,
}

impl PriceSimulator {
    pub fn new(history: Arc<PriceHistory>, interval_secs: u64) -> Self {
        Self {
            history,
            interval_secs,
        }
    }

    /// Pre-fill the history with a plausible walk ending now, so
    /// indicators have data to work with immediately after startup.
    pub fn seed_backfill(&self) {
        let count = self.history.capacity();
        let now = chrono::Utc::now().timestamp();
        let spacing = self.interval_secs.max(1) as i64;

        let mut rng = rand::thread_rng();
        let mut price = INITIAL_PRICE;
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            price = Self::step(&mut rng, price);
            let timestamp = now - (count as i64 - i as i64) * spacing;
            samples.push(PriceSample::new(timestamp, price));
        }

        for sample in samples {
            self.history.append(sample);
        }
        info!("Seeded {} simulated samples ending at {:.2}", count, price);
    }

    /// Produce and append one tick based on the latest stored price.
    pub fn tick(&self) {
        let mut rng = rand::thread_rng();
        let last = self
            .history
            .latest()
            .map(|s| s.price)
            .unwrap_or(INITIAL_PRICE);

        let price = Self::step(&mut rng, last);
        self.history
            .append(PriceSample::new(chrono::Utc::now().timestamp(), price));
    }

    fn step(rng: &mut impl Rng, last: f64) -> f64 {
        let shock: f64 = rng.gen_range(-150.0..150.0);
        let drift = *DRIFT_FACTORS.choose(rng).unwrap_or(&0.0);
        (last * (1.0 + drift) + shock).max(PRICE_FLOOR)
    }

    /// Run the tick loop forever.
    pub async fn run(self) {
        info!(
            "Starting price simulator (interval {}s)",
            self.interval_secs
        );
        let mut interval =
            tokio::time::interval(tokio::time::Duration::from_secs(self.interval_secs.max(1)));
        loop {
            interval.tick().await;
            self.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_fills_history() {
        let history = Arc::new(PriceHistory::new(50));
        let simulator = PriceSimulator::new(history.clone(), 5);
        simulator.seed_backfill();

        assert_eq!(history.len(), 50);
        for sample in history.snapshot() {
            assert!(sample.price >= PRICE_FLOOR);
        }
    }

    #[test]
    fn test_tick_appends_positive_price() {
        let history = Arc::new(PriceHistory::new(10));
        let simulator = PriceSimulator::new(history.clone(), 5);

        simulator.tick();
        simulator.tick();

        assert_eq!(history.len(), 2);
        assert!(history.latest().unwrap().price > 0.0);
    }

    #[test]
    fn test_walk_stays_above_floor() {
        let mut rng = rand::thread_rng();
        let mut price = PRICE_FLOOR + 1.0;
        for _ in 0..1000 {
            price = PriceSimulator::step(&mut rng, price);
            assert!(price >= PRICE_FLOOR);
        }
    }
}
