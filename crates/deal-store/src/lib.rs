//! The record-store collaborator: fetching raw bulk/block disclosure rows
//! and normalizing them into canonical `Deal`s.
//!
//! The engine never talks to a backing store directly. It goes through the
//! `DealStore` trait, which scopes both feeds to an inclusive date range
//! (the filtering is the store's job, not the caller's). `load_deals` is
//! the one orchestration point: it runs the two fetches concurrently, fails
//! the whole request if either fails, and hands back a single normalized,
//! date-descending `Vec<Deal>` ready for the analytics fan-out.

use async_trait::async_trait;
use core_types::{DateRange, Deal};
use sectors::SectorResolver;

mod de;
pub mod error;
pub mod memory;
pub mod normalize;
pub mod rest;
pub mod rows;

// --- Public API ---
pub use error::StoreError;
pub use memory::InMemoryDealStore;
pub use normalize::{normalize_block, normalize_bulk, DEFAULT_EXCHANGE, UNKNOWN_CLIENT};
pub use rest::RestDealStore;
pub use rows::{BlockDealRow, BulkDealRow};

/// The abstract interface to the disclosure record store.
///
/// Implementations return every row disclosed within the inclusive range,
/// or a `StoreError`; a range with no disclosures is an empty vector, not
/// an error.
#[async_trait]
pub trait DealStore: Send + Sync {
    /// Fetches raw bulk-deal disclosure rows for the range.
    async fn fetch_bulk_deals(&self, range: &DateRange) -> Result<Vec<BulkDealRow>, StoreError>;

    /// Fetches raw block-deal disclosure rows for the range.
    async fn fetch_block_deals(&self, range: &DateRange) -> Result<Vec<BlockDealRow>, StoreError>;
}

/// Fetches both disclosure feeds concurrently and normalizes them into one
/// combined deal list.
///
/// If either fetch fails the request fails as a whole; no aggregation ever
/// runs over partial data. The combined list is sorted newest-first (a
/// stable sort, so bulk rows precede block rows within a date), which fixes
/// the iteration order every downstream insertion-order tie-break sees.
pub async fn load_deals(
    store: &dyn DealStore,
    sectors: &dyn SectorResolver,
    range: &DateRange,
) -> Result<Vec<Deal>, StoreError> {
    let (bulk_rows, block_rows) = tokio::try_join!(
        store.fetch_bulk_deals(range),
        store.fetch_block_deals(range),
    )?;
    tracing::info!(
        bulk = bulk_rows.len(),
        block = block_rows.len(),
        start = %range.start,
        end = %range.end,
        "fetched disclosure rows"
    );

    let mut deals: Vec<Deal> = bulk_rows
        .iter()
        .map(|row| normalize_bulk(row, sectors))
        .collect();
    deals.extend(block_rows.iter().map(|row| normalize_block(row, sectors)));
    deals.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(deals)
}
