use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::store::models::REFUND_PROCESSED;

#[derive(Debug, Serialize, Deserialize)]
pub struct PayResponse {
    pub transaction_id: Uuid,
    pub message: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RefundRequest {
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefundResponse {
    pub transaction_id: Option<String>,
    pub message: String,
}

/// Records a payment and returns its generated identifier. The request
/// body is ignored; there is nothing for the caller to supply.
pub async fn pay(State(state): State<AppState>) -> impl IntoResponse {
    let tx = state.store.create().await;

    tracing::info!(transaction_id = %tx.id, "payment recorded");

    Json(PayResponse {
        transaction_id: tx.id,
        message: tx.message,
    })
}

/// Acknowledges a refund for a caller-supplied transaction identifier.
///
/// By default the identifier is echoed back without requiring a match in
/// the store; unknown or missing identifiers are logged but still
/// acknowledged with 200. With strict refunds enabled a missing identifier
/// is a 400 and an unknown one a 404.
pub async fn refund(
    State(state): State<AppState>,
    Json(req): Json<RefundRequest>,
) -> Result<impl IntoResponse, AppError> {
    let known = match req.transaction_id.as_deref() {
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => state.store.lookup(id).await.is_some(),
            Err(_) => false,
        },
        None => false,
    };

    if state.strict_refunds {
        let raw = req
            .transaction_id
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("transaction_id is required".to_string()))?;
        if !known {
            return Err(AppError::NotFound(format!("Transaction {} not found", raw)));
        }
    } else if !known {
        // Lenient mode acknowledges refunds it cannot match. Log the gap.
        tracing::warn!(
            transaction_id = req.transaction_id.as_deref().unwrap_or("<missing>"),
            "refund references no recorded transaction"
        );
    }

    tracing::info!(
        transaction_id = req.transaction_id.as_deref().unwrap_or("<missing>"),
        "refund acknowledged"
    );

    Ok(Json(RefundResponse {
        transaction_id: req.transaction_id,
        message: REFUND_PROCESSED.to_string(),
    }))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state
        .store
        .lookup(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;

    Ok(Json(tx))
}
