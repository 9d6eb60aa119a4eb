//! The Deal Normalizer: raw feed rows into canonical `Deal`s.

use crate::rows::{BlockDealRow, BulkDealRow};
use core_types::{Deal, DealKind, DealSide};
use rust_decimal::Decimal;
use sectors::SectorResolver;

/// Venue code assumed when a row does not name its exchange.
pub const DEFAULT_EXCHANGE: &str = "NSE";

/// Sentinel counterparty name for rows disclosed without one.
pub const UNKNOWN_CLIENT: &str = "Unknown";

/// Normalizes a bulk-deal row. Bulk feeds disclose an average price.
pub fn normalize_bulk(row: &BulkDealRow, sectors: &dyn SectorResolver) -> Deal {
    build_deal(
        DealKind::Bulk,
        row.id,
        row.date,
        &row.symbol,
        row.stock_name.as_deref(),
        row.client_name.as_deref(),
        row.deal_type.as_deref(),
        row.quantity,
        row.avg_price,
        row.exchange.as_deref(),
        sectors,
    )
}

/// Normalizes a block-deal row. Block feeds disclose a trade price.
pub fn normalize_block(row: &BlockDealRow, sectors: &dyn SectorResolver) -> Deal {
    build_deal(
        DealKind::Block,
        row.id,
        row.date,
        &row.symbol,
        row.stock_name.as_deref(),
        row.client_name.as_deref(),
        row.deal_type.as_deref(),
        row.quantity,
        row.trade_price,
        row.exchange.as_deref(),
        sectors,
    )
}

/// Shared field-coalescing rules. Zero-quantity or zero-price rows are kept
/// as zero-value deals rather than rejected; the aggregators tolerate them.
#[allow(clippy::too_many_arguments)]
fn build_deal(
    kind: DealKind,
    id: i64,
    date: chrono::NaiveDate,
    symbol: &str,
    stock_name: Option<&str>,
    client_name: Option<&str>,
    deal_type: Option<&str>,
    quantity: u64,
    price: Decimal,
    exchange: Option<&str>,
    sectors: &dyn SectorResolver,
) -> Deal {
    let symbol = symbol.trim().to_uppercase();
    let display_name = non_empty(stock_name).unwrap_or_else(|| symbol.clone());
    let client_name = non_empty(client_name).unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
    let exchange = non_empty(exchange).unwrap_or_else(|| DEFAULT_EXCHANGE.to_string());
    // An absent marker is a buy; `from_marker` handles everything else.
    let side = deal_type.map_or(DealSide::Buy, DealSide::from_marker);
    let sector = sectors.resolve(&symbol);
    // Prices are clamped on deserialization too, but rows can be built
    // directly; the `value >= 0` invariant must hold for every `Deal`.
    let price = price.max(Decimal::ZERO);
    let value = Decimal::from(quantity) * price;

    Deal {
        id,
        date,
        symbol,
        display_name,
        client_name,
        side,
        kind,
        quantity,
        price,
        value,
        exchange,
        sector,
    }
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
