use crate::de;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

// The two disclosure feeds share most fields but alias the price: bulk rows
// disclose an average price, block rows a trade price. Anything optional in
// the source stays optional here; defaults are applied during normalization.

/// A raw bulk-deal disclosure row as returned by the record store.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDealRow {
    pub id: i64,
    pub date: NaiveDate,
    pub symbol: String,
    #[serde(default)]
    pub stock_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub deal_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_quantity")]
    pub quantity: u64,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub avg_price: Decimal,
    #[serde(default)]
    pub exchange: Option<String>,
}

/// A raw block-deal disclosure row as returned by the record store.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDealRow {
    pub id: i64,
    pub date: NaiveDate,
    pub symbol: String,
    #[serde(default)]
    pub stock_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub deal_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_quantity")]
    pub quantity: u64,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub trade_price: Decimal,
    #[serde(default)]
    pub exchange: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_a_complete_bulk_row() {
        let row: BulkDealRow = serde_json::from_str(
            r#"{"id":1,"date":"2024-01-10","symbol":"RELIANCE","stock_name":"Reliance Industries",
                "client_name":"Acme Mutual Fund","deal_type":"buy","quantity":100,
                "avg_price":"2850.55","exchange":"NSE"}"#,
        )
        .unwrap();
        assert_eq!(row.quantity, 100);
        assert_eq!(row.avg_price, dec!(2850.55));
    }

    #[test]
    fn malformed_numerics_coerce_to_zero_instead_of_failing_the_row() {
        let row: BlockDealRow = serde_json::from_str(
            r#"{"id":2,"date":"2024-01-10","symbol":"TCS","quantity":"oops","trade_price":null}"#,
        )
        .unwrap();
        assert_eq!(row.quantity, 0);
        assert_eq!(row.trade_price, Decimal::ZERO);
        assert!(row.client_name.is_none());
    }
}
