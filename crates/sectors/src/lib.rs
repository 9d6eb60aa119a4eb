//! Symbol-to-sector resolution.
//!
//! The rest of the system treats sector lookup as a collaborator behind the
//! `SectorResolver` trait: a pure, total function from any ticker symbol to
//! a sector label. The built-in `StaticSectorMap` resolves against a fixed
//! table of NSE large-caps and falls back to a catch-all bucket, so a lookup
//! can never fail and never needs invalidation.

use std::collections::HashMap;

/// The catch-all sector returned for symbols missing from the table.
pub const DEFAULT_SECTOR: &str = "Others";

/// A pure, total lookup from a ticker symbol to a sector label.
///
/// Implementations must return a label for every possible input string;
/// unrecognized symbols map to a default bucket rather than an error.
pub trait SectorResolver: Send + Sync {
    fn resolve(&self, symbol: &str) -> String;
}

/// Static symbol/sector pairs backing the default resolver.
const SECTOR_TABLE: &[(&str, &str)] = &[
    // Banking
    ("HDFCBANK", "Banking"),
    ("ICICIBANK", "Banking"),
    ("SBIN", "Banking"),
    ("AXISBANK", "Banking"),
    ("KOTAKBANK", "Banking"),
    ("INDUSINDBK", "Banking"),
    ("BANDHANBNK", "Banking"),
    ("FEDERALBNK", "Banking"),
    ("IDFCFIRSTB", "Banking"),
    ("PNB", "Banking"),
    // IT
    ("TCS", "IT"),
    ("INFY", "IT"),
    ("HCLTECH", "IT"),
    ("WIPRO", "IT"),
    ("TECHM", "IT"),
    ("LTI", "IT"),
    ("MINDTREE", "IT"),
    ("MPHASIS", "IT"),
    // Oil & Gas
    ("RELIANCE", "Oil & Gas"),
    ("ONGC", "Oil & Gas"),
    ("IOC", "Oil & Gas"),
    ("BPCL", "Oil & Gas"),
    ("GAIL", "Oil & Gas"),
    // Pharma
    ("SUNPHARMA", "Pharma"),
    ("DRREDDY", "Pharma"),
    ("CIPLA", "Pharma"),
    ("DIVISLAB", "Pharma"),
    ("BIOCON", "Pharma"),
    ("LUPIN", "Pharma"),
    // Auto
    ("MARUTI", "Auto"),
    ("TATAMOTORS", "Auto"),
    ("M&M", "Auto"),
    ("BAJAJ-AUTO", "Auto"),
    ("HEROMOTOCO", "Auto"),
    ("EICHERMOT", "Auto"),
    // FMCG
    ("HINDUNILVR", "FMCG"),
    ("ITC", "FMCG"),
    ("NESTLEIND", "FMCG"),
    ("BRITANNIA", "FMCG"),
    ("DABUR", "FMCG"),
    ("GODREJCP", "FMCG"),
    // Metals
    ("TATASTEEL", "Metals"),
    ("JSWSTEEL", "Metals"),
    ("HINDALCO", "Metals"),
    ("VEDL", "Metals"),
    ("COALINDIA", "Metals"),
    ("NMDC", "Metals"),
    // Telecom
    ("BHARTIARTL", "Telecom"),
    ("IDEA", "Telecom"),
    // Cement
    ("ULTRACEMCO", "Cement"),
    ("SHREECEM", "Cement"),
    ("ACC", "Cement"),
    ("AMBUJACEMENT", "Cement"),
    // Power
    ("NTPC", "Power"),
    ("POWERGRID", "Power"),
    ("TATAPOWER", "Power"),
    // Realty
    ("DLF", "Realty"),
    ("GODREJPROP", "Realty"),
    ("OBEROIRLTY", "Realty"),
];

/// The default resolver, backed by the static table above.
#[derive(Debug, Clone)]
pub struct StaticSectorMap {
    map: HashMap<&'static str, &'static str>,
}

impl StaticSectorMap {
    pub fn new() -> Self {
        Self {
            map: SECTOR_TABLE.iter().copied().collect(),
        }
    }
}

impl Default for StaticSectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorResolver for StaticSectorMap {
    fn resolve(&self, symbol: &str) -> String {
        let key = symbol.to_uppercase();
        self.map
            .get(key.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_SECTOR.to_string())
    }
}
