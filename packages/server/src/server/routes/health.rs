//! GET /health: whether the url store answers, with its current totals.

use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::domains::urls::{Url, UrlStats};
use crate::server::app::AppState;

const STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<UrlStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    fn healthy(stats: UrlStats) -> Self {
        Self {
            status: HealthStatus::Healthy,
            urls: Some(stats),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            urls: None,
            error: Some(error),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Loads url and check totals within a 5s budget. 200 with the totals when the
/// store answers, 503 with the reason otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthReport>) {
    let report = match tokio::time::timeout(STORE_TIMEOUT, Url::stats(&state.db_pool)).await {
        Ok(Ok(stats)) => HealthReport::healthy(stats),
        Ok(Err(e)) => {
            warn!(error = %e, "Health check could not read url stats");
            HealthReport::unhealthy(format!("{:#}", e))
        }
        Err(_) => {
            warn!("Health check timed out");
            HealthReport::unhealthy(format!(
                "url store did not answer within {}s",
                STORE_TIMEOUT.as_secs()
            ))
        }
    };

    (report.status_code(), Json(report))
}
