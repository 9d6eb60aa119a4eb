use crate::enums::{DealKind, DealSide};
use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single disclosed large trade, normalized from either raw feed shape.
///
/// `Deal` is immutable once constructed: the aggregators only ever read it.
/// `value` is always `quantity × price`, never supplied independently, and
/// both factors are clamped to be non-negative during normalization, so
/// `value >= 0` holds for every `Deal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Identifier of the source disclosure record.
    pub id: i64,
    /// Calendar date the deal was disclosed (no time component).
    pub date: NaiveDate,
    /// Exchange ticker, uppercase.
    pub symbol: String,
    /// Human-readable security name; the symbol when the feed omits it.
    pub display_name: String,
    /// Counterparty name as disclosed; `"Unknown"` when the feed omits it.
    pub client_name: String,
    pub side: DealSide,
    /// Which disclosure feed the record came from.
    pub kind: DealKind,
    pub quantity: u64,
    pub price: Decimal,
    /// Derived notional, `quantity × price`.
    pub value: Decimal,
    pub exchange: String,
    /// Sector label resolved from the symbol; `"Others"` for unknown symbols.
    pub sector: String,
}

/// An inclusive calendar date range used to scope a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an end date earlier than the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::InvalidInput(
                "date range".to_string(),
                format!("end date {} is before start date {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        assert!(DateRange::new(d("2024-02-01"), d("2024-01-01")).is_err());
        // A single-day range is valid.
        assert!(DateRange::new(d("2024-01-01"), d("2024-01-01")).is_ok());
    }
}
