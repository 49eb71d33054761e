//! Trend classification over indicator snapshots.

use crate::types::{IndicatorSnapshot, Trend};

/// Classify the market trend from the current indicator snapshot.
///
/// Pure function; rule order matters and the first match wins:
/// 1. MACD unavailable -> Unknown
/// 2. MACD line crossed above its signal since `previous` -> BullishCrossover
/// 3. MACD line crossed below its signal -> BearishCrossover
/// 4. Price above SMA with RSI over 50 -> Uptrend
/// 5. Price below SMA with RSI under 50 -> Downtrend
/// 6. Otherwise -> Sideways
///
/// Crossover detection needs the previous snapshot's MACD relation; on the
/// first evaluation those rules are skipped.
pub fn classify(
    current: &IndicatorSnapshot,
    previous: Option<&IndicatorSnapshot>,
    latest_price: f64,
) -> Trend {
    let (line, signal) = match (current.macd_line, current.macd_signal) {
        (Some(line), Some(signal)) => (line, signal),
        _ => return Trend::Unknown,
    };

    if let Some(prev) = previous {
        if let (Some(prev_line), Some(prev_signal)) = (prev.macd_line, prev.macd_signal) {
            if prev_line < prev_signal && line > signal {
                return Trend::BullishCrossover;
            }
            if prev_line > prev_signal && line < signal {
                return Trend::BearishCrossover;
            }
        }
    }

    if let (Some(sma), Some(rsi)) = (current.sma, current.rsi) {
        if latest_price > sma && rsi > 50.0 {
            return Trend::Uptrend;
        }
        if latest_price < sma && rsi < 50.0 {
            return Trend::Downtrend;
        }
    }

    Trend::Sideways
}
