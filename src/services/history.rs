//! Bounded price history store.

use crate::types::PriceSample;
use std::collections::VecDeque;
use std::sync::RwLock;

/// Ordered, capacity-bounded sequence of price samples.
///
/// Single coarse lock: one background producer appends every few seconds,
/// request handlers take read snapshots. Appends evict the oldest sample
/// once the cap is reached, so the store never grows past `max_samples`.
pub struct PriceHistory {
    samples: RwLock<VecDeque<PriceSample>>,
    max_samples: usize,
}

impl PriceHistory {
    /// Create an empty history retaining at most `max_samples` entries.
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: RwLock::new(VecDeque::with_capacity(max_samples)),
            max_samples,
        }
    }

    /// Append a sample, evicting the oldest entry at capacity.
    ///
    /// Timestamps are kept non-decreasing: a sample dated earlier than the
    /// newest stored one is clamped forward rather than reordered.
    pub fn append(&self, sample: PriceSample) {
        let mut samples = self.samples.write().unwrap();

        let mut sample = sample;
        if let Some(last) = samples.back() {
            if sample.timestamp < last.timestamp {
                sample.timestamp = last.timestamp;
            }
        }

        samples.push_back(sample);
        while samples.len() > self.max_samples {
            samples.pop_front();
        }
    }

    /// Most recent sample, or None while empty.
    pub fn latest(&self) -> Option<PriceSample> {
        self.samples.read().unwrap().back().copied()
    }

    /// Full ordered copy (oldest first) for indicator computation.
    pub fn snapshot(&self) -> Vec<PriceSample> {
        self.samples.read().unwrap().iter().copied().collect()
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.read().unwrap().len()
    }

    /// Check whether the history holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.read().unwrap().is_empty()
    }

    /// Maximum number of samples retained.
    pub fn capacity(&self) -> usize {
        self.max_samples
    }
}
