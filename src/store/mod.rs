use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::Receipt;
use crate::rules::RuleSet;
use crate::validate;

/// Store failures visible to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Receipt total does not match the required `0.00` format.
    #[error("invalid total format: {0:?}")]
    InvalidTotal(String),

    /// No receipt stored under the given identifier.
    #[error("receipt not found: {0}")]
    NotFound(Uuid),
}

#[derive(Default)]
struct StoreInner {
    receipts: HashMap<Uuid, Receipt>,
    points: HashMap<Uuid, u64>,
}

/// Identifier-keyed in-memory store of receipts and their scores.
///
/// The score is computed exactly once, at insertion, and both maps are
/// written under a single guard so readers never observe a record present
/// in one map but absent from the other. Memory-resident only: nothing
/// survives a process restart, and records are never updated or evicted.
pub struct ReceiptStore {
    ruleset: Arc<RuleSet>,
    inner: RwLock<StoreInner>,
}

impl ReceiptStore {
    pub fn new(ruleset: Arc<RuleSet>) -> Self {
        ReceiptStore {
            ruleset,
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Score a receipt and record it under a fresh identifier.
    ///
    /// The total-format precondition is checked first; a rejected receipt is
    /// never stored. Scoring happens outside the lock since it only reads
    /// the receipt being inserted.
    pub fn insert(&self, receipt: Receipt) -> Result<Uuid, StoreError> {
        if !validate::is_valid_total(&receipt.total) {
            return Err(StoreError::InvalidTotal(receipt.total.clone()));
        }

        let points = self.ruleset.total_points(&receipt);
        let id = Uuid::new_v4();

        let mut inner = self.inner.write();
        inner.receipts.insert(id, receipt);
        inner.points.insert(id, points);

        Ok(id)
    }

    /// Stored score for an identifier. No side effects.
    pub fn get_points(&self, id: Uuid) -> Result<u64, StoreError> {
        self.inner
            .read()
            .points
            .get(&id)
            .copied()
            .ok_or(StoreError::NotFound(id))
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.inner.read().receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if every stored receipt has a score and vice versa.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let inner = self.inner.read();
        inner.receipts.len() == inner.points.len()
            && inner.receipts.keys().all(|id| inner.points.contains_key(id))
    }
}
