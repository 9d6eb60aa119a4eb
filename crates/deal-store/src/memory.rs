//! An in-memory `DealStore` for tests and offline development.

use crate::error::StoreError;
use crate::rows::{BlockDealRow, BulkDealRow};
use crate::DealStore;
use async_trait::async_trait;
use core_types::DateRange;

/// Serves pre-seeded rows, applying the same inclusive date filtering the
/// real store performs server-side.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDealStore {
    bulk: Vec<BulkDealRow>,
    block: Vec<BlockDealRow>,
}

impl InMemoryDealStore {
    pub fn new(bulk: Vec<BulkDealRow>, block: Vec<BlockDealRow>) -> Self {
        Self { bulk, block }
    }
}

#[async_trait]
impl DealStore for InMemoryDealStore {
    async fn fetch_bulk_deals(&self, range: &DateRange) -> Result<Vec<BulkDealRow>, StoreError> {
        Ok(self
            .bulk
            .iter()
            .filter(|row| row.date >= range.start && row.date <= range.end)
            .cloned()
            .collect())
    }

    async fn fetch_block_deals(&self, range: &DateRange) -> Result<Vec<BlockDealRow>, StoreError> {
        Ok(self
            .block
            .iter()
            .filter(|row| row.date >= range.start && row.date <= range.end)
            .cloned()
            .collect())
    }
}
