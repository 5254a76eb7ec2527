use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Store health as reported on GET /health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Pool counters sit at the top level next to `status`.
    #[serde(flatten)]
    pub pool: Option<PoolStats>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoolStats {
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    pub max_connections: u32,
}

impl HealthReport {
    pub fn up(pool: PoolStats) -> Self {
        let message = if pool.in_use * 5 > pool.max_connections * 4 {
            "The database is experiencing heavy load."
        } else {
            "It's healthy"
        };
        Self {
            status: HealthStatus::Up,
            message: message.into(),
            error: None,
            pool: Some(pool),
        }
    }

    pub fn down(error: impl std::fmt::Display) -> Self {
        Self {
            status: HealthStatus::Down,
            message: "The database is unreachable.".into(),
            error: Some(format!("db down: {error}")),
            pool: None,
        }
    }
}

#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let report = state.store.health().await;
    if report.status == HealthStatus::Down {
        warn!(error = ?report.error, "health check failed");
    }
    Json(report)
}
