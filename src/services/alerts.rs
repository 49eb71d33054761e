//! Price alert registry.

use crate::error::{AppError, Result};
use crate::types::{Alert, AlertDirection};
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

/// In-memory registry of threshold price alerts.
///
/// Duplicate levels are allowed. Triggered alerts are reported by exactly
/// one `evaluate` call and removed in the same pass, so a caller observes
/// each trigger once.
pub struct AlertRegistry {
    asset: String,
    alerts: DashMap<Uuid, Alert>,
}

impl AlertRegistry {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            alerts: DashMap::new(),
        }
    }

    /// Create a new alert. Fails with BadRequest on a non-positive level.
    pub fn create(&self, price_level: f64, direction: AlertDirection) -> Result<Alert> {
        if !(price_level > 0.0) {
            return Err(AppError::BadRequest(format!(
                "price level must be positive, got {price_level}"
            )));
        }

        let alert = Alert {
            id: Uuid::new_v4(),
            asset: self.asset.clone(),
            price_level,
            direction,
            triggered: false,
            created_at: chrono::Utc::now().timestamp(),
        };

        self.alerts.insert(alert.id, alert.clone());
        info!("Alert created: {} for price {} {}", alert.id, price_level, direction);
        Ok(alert)
    }

    /// Delete an alert by id. Fails with NotFound when absent.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.alerts
            .remove(&id)
            .map(|_| info!("Alert deleted: {id}"))
            .ok_or_else(|| AppError::NotFound(format!("alert {id} not found")))
    }

    /// Evaluate all active alerts against the current price.
    ///
    /// Matching alerts (`>=` level for Above, `<=` for Below) are marked
    /// triggered, removed from the registry, and returned.
    pub fn evaluate(&self, current_price: f64) -> Vec<Alert> {
        let fired: Vec<Uuid> = self
            .alerts
            .iter()
            .filter(|entry| {
                let alert = entry.value();
                !alert.triggered
                    && match alert.direction {
                        AlertDirection::Above => current_price >= alert.price_level,
                        AlertDirection::Below => current_price <= alert.price_level,
                    }
            })
            .map(|entry| *entry.key())
            .collect();

        let mut triggered = Vec::with_capacity(fired.len());
        for id in fired {
            if let Some((_, mut alert)) = self.alerts.remove(&id) {
                alert.triggered = true;
                info!("Alert triggered: {} at price {current_price}", alert.id);
                triggered.push(alert);
            }
        }

        triggered.sort_by_key(|a| a.created_at);
        triggered
    }

    /// Number of registered alerts.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
