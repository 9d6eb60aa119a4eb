//! Lenient numeric deserialization for the disclosure feeds.
//!
//! The raw rows are loosely typed: quantities and prices arrive as numbers,
//! numeric strings, nulls, or occasionally garbage. A single bad field must
//! never fail the batch, so every numeric coerces to zero on anything
//! unparseable and negatives are clamped to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_decimal(value.unwrap_or(Value::Null)))
}

pub(crate) fn lenient_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_quantity(value.unwrap_or(Value::Null)))
}

fn coerce_decimal(value: Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

fn coerce_quantity(value: Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| if f.is_finite() && f > 0.0 { f as u64 } else { 0 }))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| if f.is_finite() && f > 0.0 { f as u64 } else { 0 }))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn decimals_accept_numbers_strings_and_garbage() {
        assert_eq!(coerce_decimal(json!(12.5)), dec!(12.5));
        assert_eq!(coerce_decimal(json!("12.5")), dec!(12.5));
        assert_eq!(coerce_decimal(json!(" 7 ")), dec!(7));
        assert_eq!(coerce_decimal(json!("not a price")), Decimal::ZERO);
        assert_eq!(coerce_decimal(Value::Null), Decimal::ZERO);
        // Negatives are clamped on parse.
        assert_eq!(coerce_decimal(json!(-3)), Decimal::ZERO);
    }

    #[test]
    fn quantities_accept_numbers_strings_and_garbage() {
        assert_eq!(coerce_quantity(json!(100)), 100);
        assert_eq!(coerce_quantity(json!("250")), 250);
        assert_eq!(coerce_quantity(json!(99.9)), 99);
        assert_eq!(coerce_quantity(json!(-5)), 0);
        assert_eq!(coerce_quantity(json!("junk")), 0);
        assert_eq!(coerce_quantity(Value::Null), 0);
    }
}
