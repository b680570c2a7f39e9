use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PAYMENT_PROCESSED: &str = "Payment processed successfully.";
pub const REFUND_PROCESSED: &str = "Refund processed successfully.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// A freshly recorded payment. The status and message are fixed at
    /// creation and never updated afterwards, even if a refund later
    /// references this identifier.
    pub fn processed() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: "processed".to_string(),
            message: PAYMENT_PROCESSED.to_string(),
            created_at: Utc::now(),
        }
    }
}
