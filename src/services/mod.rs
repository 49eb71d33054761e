//! Core analysis and alerting services.

pub mod alerts;
pub mod analysis;
pub mod history;
pub mod indicators;
pub mod sentiment;
pub mod trade_idea;
pub mod trend;

pub use alerts::AlertRegistry;
pub use analysis::AnalysisService;
pub use history::PriceHistory;
pub use indicators::IndicatorEngine;
pub use sentiment::{FixedSentimentProvider, MockSentimentProvider, SentimentProvider};
