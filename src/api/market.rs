//! Market analysis endpoints.

use crate::error::Result;
use crate::types::{MarketData, TradeIdea};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};

/// GET /api/market-data
async fn get_market_data(State(state): State<AppState>) -> Result<Json<MarketData>> {
    let market = state.analysis.market_data()?;
    Ok(Json(market))
}

/// GET /api/trade-idea
async fn get_trade_idea(State(state): State<AppState>) -> Result<Json<TradeIdea>> {
    let idea = state.analysis.trade_idea()?;
    Ok(Json(idea))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/market-data", get(get_market_data))
        .route("/api/trade-idea", get(get_trade_idea))
}
