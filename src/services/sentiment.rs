//! Mock sentiment source.

use crate::types::{SentimentLabel, SentimentReading};
use rand::seq::SliceRandom;

/// Supplies a sentiment reading for each analysis request.
///
/// Injectable so tests can substitute a deterministic stub.
pub trait SentimentProvider: Send + Sync {
    fn reading(&self) -> SentimentReading;
}

/// Mock headline pool and the sentiment attached to each entry.
const HEADLINES: &[(&str, f64, SentimentLabel)] = &[
    (
        "BTC soaring! To the moon we go! #Bitcoin",
        0.9,
        SentimentLabel::Bullish,
    ),
    (
        "Looks like BTC is consolidating around its current price. Neutral for now.",
        0.1,
        SentimentLabel::Neutral,
    ),
    (
        "Big drop in BTC, a bit worried. Holding off for now. #CryptoCrash",
        -0.8,
        SentimentLabel::Bearish,
    ),
    (
        "Analyst predicts BTC will hit 70k soon. Very bullish!",
        0.75,
        SentimentLabel::Bullish,
    ),
    (
        "Not sure about BTC at these levels, might see a correction.",
        -0.4,
        SentimentLabel::Bearish,
    ),
];

/// Samples a fixed headline pool uniformly at random.
pub struct MockSentimentProvider;

impl SentimentProvider for MockSentimentProvider {
    fn reading(&self) -> SentimentReading {
        let (text, score, label) = HEADLINES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(("No market chatter available.", 0.0, SentimentLabel::Neutral));

        SentimentReading {
            score,
            label,
            text: text.to_string(),
        }
    }
}

/// Always returns the same reading. Test helper.
pub struct FixedSentimentProvider {
    pub reading: SentimentReading,
}

impl FixedSentimentProvider {
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self {
            reading: SentimentReading {
                score,
                label,
                text: format!("{} (fixed)", label),
            },
        }
    }
}

impl SentimentProvider for FixedSentimentProvider {
    fn reading(&self) -> SentimentReading {
        self.reading.clone()
    }
}
