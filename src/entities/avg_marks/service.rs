//! Average-mark recomputation
//!
//! The aggregate is rebuilt from scratch on every call: all marks of the
//! product are read, summed and counted, and the result replaces the stored
//! row. When no marks remain the row is deleted.
//!
//! Concurrent recomputations for one product are not serialized; the last
//! upsert wins. The aggregate is advisory.

use super::model::AvgMark;
use super::store::AvgMarkStore;
use crate::core::StoreResult;
use crate::entities::marks::MarkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AvgMarkService {
    marks: Arc<dyn MarkStore>,
    averages: Arc<dyn AvgMarkStore>,
}

impl AvgMarkService {
    pub fn new(marks: Arc<dyn MarkStore>, averages: Arc<dyn AvgMarkStore>) -> Self {
        Self { marks, averages }
    }

    pub fn store(&self) -> &Arc<dyn AvgMarkStore> {
        &self.averages
    }

    /// Rebuild the aggregate for `product_id`.
    ///
    /// Returns `None` when the product has no marks (and no aggregate).
    pub async fn recalculate(&self, product_id: i64) -> StoreResult<Option<AvgMark>> {
        let marks = self.marks.list_product_marks(product_id).await?;

        if marks.is_empty() {
            let removed = self.averages.delete_avg_mark(product_id).await?;
            tracing::debug!(product_id, removed, "no marks left, aggregate cleared");
            return Ok(None);
        }

        let sum: f64 = marks.iter().map(|m| m.mark).sum();
        let count = marks.len() as i64;
        let avg = self
            .averages
            .upsert_avg_mark(product_id, sum, count)
            .await?;

        tracing::debug!(product_id, sum, count, "aggregate recalculated");
        Ok(Some(avg))
    }

    /// Best-effort [`recalculate`](Self::recalculate): failures are logged
    /// and swallowed.
    pub async fn refresh(&self, product_id: i64) {
        if let Err(e) = self.recalculate(product_id).await {
            tracing::error!(product_id, error = %e, "failed to recalculate average mark");
        }
    }
}
