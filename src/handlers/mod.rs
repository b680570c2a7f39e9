pub mod payments;

use crate::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreStats {
    pub transactions: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub store: StoreStats,
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    // The store is in-process, so there is no dependency that could
    // degrade; liveness plus store statistics is all there is to report.
    let health_response = HealthStatus {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        store: StoreStats {
            transactions: state.store.count().await,
        },
    };

    Json(health_response)
}
