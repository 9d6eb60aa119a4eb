use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a disclosed deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealSide {
    Buy,
    Sell,
}

impl DealSide {
    /// Parses the `deal_type` marker carried by the raw disclosure feeds.
    ///
    /// Only the exact lowercase marker `"sell"` produces `Sell`; everything
    /// else defaults to `Buy`, matching the upstream feed contract. A marker
    /// that is neither `"buy"` nor `"sell"` is logged before defaulting so
    /// the silent fallback stays observable.
    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "sell" => DealSide::Sell,
            "buy" => DealSide::Buy,
            other => {
                tracing::warn!(marker = other, "unrecognized deal side marker, defaulting to Buy");
                DealSide::Buy
            }
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, DealSide::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, DealSide::Sell)
    }
}

impl fmt::Display for DealSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealSide::Buy => write!(f, "Buy"),
            DealSide::Sell => write!(f, "Sell"),
        }
    }
}

/// Which regulatory disclosure feed a deal came from. The two feeds carry
/// the same economic meaning but different field layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealKind {
    Bulk,
    Block,
}

/// Heuristic investor category derived from the disclosed counterparty name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestorClass {
    #[serde(rename = "FII")]
    Fii,
    #[serde(rename = "DII")]
    Dii,
    #[serde(rename = "HNI")]
    Hni,
    Others,
}

impl fmt::Display for InvestorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestorClass::Fii => write!(f, "FII"),
            InvestorClass::Dii => write!(f, "DII"),
            InvestorClass::Hni => write!(f, "HNI"),
            InvestorClass::Others => write!(f, "Others"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sell_marker_must_match_exactly() {
        assert_eq!(DealSide::from_marker("sell"), DealSide::Sell);
        assert_eq!(DealSide::from_marker("buy"), DealSide::Buy);
        // Case variants and garbage default to Buy.
        assert_eq!(DealSide::from_marker("SELL"), DealSide::Buy);
        assert_eq!(DealSide::from_marker("Sell"), DealSide::Buy);
        assert_eq!(DealSide::from_marker(""), DealSide::Buy);
    }
}
