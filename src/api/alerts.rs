//! Price alert endpoints.

use crate::error::{AppError, Result};
use crate::types::{Alert, CreateAlertRequest};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

/// POST /api/alerts
async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<Alert>)> {
    let alert = state.alerts.create(request.price_level, request.direction)?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// GET /api/check-alerts
///
/// Evaluates all active alerts against the latest price and returns the
/// newly triggered ones. Triggered alerts do not appear again.
async fn check_alerts(State(state): State<AppState>) -> Result<Json<Vec<Alert>>> {
    let current_price = state
        .history
        .latest()
        .map(|s| s.price)
        .ok_or_else(|| AppError::NotFound("no price data yet".to_string()))?;

    Ok(Json(state.alerts.evaluate(current_price)))
}

/// DELETE /api/alerts/:id
async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.alerts.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/alerts", post(create_alert))
        .route("/api/alerts/:id", delete(delete_alert))
        .route("/api/check-alerts", get(check_alerts))
}
