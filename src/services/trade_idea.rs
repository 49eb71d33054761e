//! Rule-table trade idea generation.

use crate::types::{SentimentLabel, SentimentReading, Trend, TradeAction, TradeConfidence, TradeIdea};

/// One row of the decision table.
///
/// `sentiments: None` matches any sentiment.
struct DecisionRule {
    trends: &'static [Trend],
    sentiments: Option<&'static [SentimentLabel]>,
    action: TradeAction,
}

impl DecisionRule {
    fn matches(&self, trend: Trend, sentiment: SentimentLabel) -> bool {
        self.trends.contains(&trend)
            && self.sentiments.map_or(true, |s| s.contains(&sentiment))
    }
}

/// Ordered decision table; the first matching row decides the action.
/// Scanned top to bottom, so precedence is explicit in the data.
const DECISION_TABLE: &[DecisionRule] = &[
    DecisionRule {
        trends: &[Trend::Uptrend, Trend::BullishCrossover],
        sentiments: Some(&[SentimentLabel::Bullish, SentimentLabel::Neutral]),
        action: TradeAction::Buy,
    },
    DecisionRule {
        trends: &[Trend::Downtrend, Trend::BearishCrossover],
        sentiments: Some(&[SentimentLabel::Bearish, SentimentLabel::Neutral]),
        action: TradeAction::Sell,
    },
    DecisionRule {
        trends: &[Trend::Sideways, Trend::Unknown],
        sentiments: None,
        action: TradeAction::Hold,
    },
    DecisionRule {
        trends: &[Trend::Uptrend, Trend::BullishCrossover],
        sentiments: Some(&[SentimentLabel::Bearish]),
        action: TradeAction::Hold,
    },
    DecisionRule {
        trends: &[Trend::Downtrend, Trend::BearishCrossover],
        sentiments: Some(&[SentimentLabel::Bullish]),
        action: TradeAction::Hold,
    },
];

/// Look up the action for a trend/sentiment pair.
/// Total: every combination resolves, falling back to Hold.
pub fn decide(trend: Trend, sentiment: SentimentLabel) -> TradeAction {
    DECISION_TABLE
        .iter()
        .find(|rule| rule.matches(trend, sentiment))
        .map(|rule| rule.action)
        .unwrap_or(TradeAction::Hold)
}

// Stop-loss / take-profit multipliers: 1.5% stop, 3% target (2:1).
const STOP_LOSS_PCT: f64 = 0.015;
const TAKE_PROFIT_PCT: f64 = 0.03;

/// Generate a trade idea for the given market conditions.
///
/// Deterministic given its inputs and free of side effects. Actionable
/// ideas carry entry/stop/target levels derived from the current price.
pub fn generate(
    asset: &str,
    current_price: f64,
    trend: Trend,
    sentiment: &SentimentReading,
) -> TradeIdea {
    let action = decide(trend, sentiment.label);

    let rationale = match action {
        TradeAction::Buy => format!(
            "{} with {} sentiment supports a long entry.",
            trend.name(),
            sentiment.label
        ),
        TradeAction::Sell => format!(
            "{} with {} sentiment supports a short entry.",
            trend.name(),
            sentiment.label
        ),
        TradeAction::Hold => format!(
            "{} with {} sentiment gives no actionable edge.",
            trend.name(),
            sentiment.label
        ),
    };

    let (entry_price, stop_loss, take_profit, confidence) = match action {
        TradeAction::Buy => (
            Some(current_price),
            Some(current_price * (1.0 - STOP_LOSS_PCT)),
            Some(current_price * (1.0 + TAKE_PROFIT_PCT)),
            TradeConfidence::Medium,
        ),
        TradeAction::Sell => (
            Some(current_price),
            Some(current_price * (1.0 + STOP_LOSS_PCT)),
            Some(current_price * (1.0 - TAKE_PROFIT_PCT)),
            TradeConfidence::Medium,
        ),
        TradeAction::Hold => (None, None, None, TradeConfidence::None),
    };

    TradeIdea {
        asset: asset.to_string(),
        action,
        rationale,
        confidence,
        entry_price,
        stop_loss,
        take_profit,
        generated_at: chrono::Utc::now().timestamp(),
    }
}
