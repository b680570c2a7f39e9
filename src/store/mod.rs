pub mod models;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::Transaction;

/// In-memory transaction store shared by all request handlers.
///
/// Records are created by payments and never mutated or deleted for the
/// life of the process. Cloning is cheap; all clones share one map.
#[derive(Clone)]
pub struct TransactionStore {
    records: Arc<RwLock<HashMap<Uuid, Transaction>>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records a new payment and returns the stored transaction.
    pub async fn create(&self) -> Transaction {
        let tx = Transaction::processed();
        let mut records = self.records.write().await;
        records.insert(tx.id, tx.clone());
        tx
    }

    pub async fn lookup(&self, id: Uuid) -> Option<Transaction> {
        self.records.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
