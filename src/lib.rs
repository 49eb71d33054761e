//! Tidewatch - BTC/USD market analysis and alerting server

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<services::PriceHistory>,
    pub analysis: Arc<services::AnalysisService>,
    pub alerts: Arc<services::AlertRegistry>,
}

// Re-export commonly used types
pub use services::{AlertRegistry, AnalysisService, IndicatorEngine, PriceHistory};
pub use types::*;
