use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which side of the threshold fires the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    Above,
    Below,
}

impl AlertDirection {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "above" => Some(Self::Above),
            "below" => Some(Self::Below),
            _ => None,
        }
    }
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertDirection::Above => write!(f, "above"),
            AlertDirection::Below => write!(f, "below"),
        }
    }
}

/// A user-defined price threshold alert.
///
/// Lifecycle: Active -> Triggered -> Removed, or Active -> Removed via
/// explicit delete. The triggered flag is flipped only by evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub asset: String,
    pub price_level: f64,
    pub direction: AlertDirection,
    pub triggered: bool,
    /// Unix timestamp in seconds.
    pub created_at: i64,
}

/// Request body for creating an alert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub price_level: f64,
    pub direction: AlertDirection,
}
