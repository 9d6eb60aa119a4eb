use chrono::NaiveDate;
use core_types::{DealSide, InvestorClass};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The symbol with the highest deal count over the analyzed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostActiveStock {
    pub symbol: String,
    pub display_name: String,
    pub deal_count: usize,
    pub total_value: Decimal,
}

/// Top-line totals over the full deal set, computed in one linear pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_buying: Decimal,
    pub total_selling: Decimal,
    /// `total_buying - total_selling`.
    pub net_flow: Decimal,
    pub total_deals: usize,
    pub buy_deals: usize,
    pub sell_deals: usize,
    /// Ranked by deal count, not value; `None` when the input is empty.
    pub most_active_stock: Option<MostActiveStock>,
}

impl KpiSummary {
    /// Creates a zeroed-out summary, the correct result for an empty input.
    pub fn new() -> Self {
        Self {
            total_buying: Decimal::ZERO,
            total_selling: Decimal::ZERO,
            net_flow: Decimal::ZERO,
            total_deals: 0,
            buy_deals: 0,
            sell_deals: 0,
            most_active_stock: None,
        }
    }
}

impl Default for KpiSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-sector roll-up row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBreakdown {
    pub sector: String,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub net_flow: Decimal,
    pub deal_count: usize,
    /// Share of the grand total, `(buy + sell) / grand_total × 100`;
    /// zero when the grand total is zero.
    pub percentage: Decimal,
}

/// Per-stock roll-up row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBreakdown {
    pub symbol: String,
    pub display_name: String,
    pub sector: String,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub net_flow: Decimal,
    pub deal_count: usize,
    pub buy_deals: usize,
    pub sell_deals: usize,
    /// Mean disclosed price over the side's deals; zero if the side is empty.
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    /// First 5 distinct buyer names in encounter order, not ranked by value.
    pub top_buyers: Vec<String>,
    /// First 5 distinct seller names in encounter order, not ranked by value.
    pub top_sellers: Vec<String>,
}

/// Per-counterparty roll-up row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorBreakdown {
    pub client_name: String,
    pub investor_class: InvestorClass,
    pub total_value: Decimal,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub net_flow: Decimal,
    pub deal_count: usize,
    pub buy_deals: usize,
    pub sell_deals: usize,
    /// Distinct symbols this counterparty traded.
    pub stocks_traded: usize,
    /// First 3 distinct sectors in encounter order, not ranked by frequency.
    pub preferred_sectors: Vec<String>,
    pub avg_deal_size: Decimal,
}

/// One day of aggregate flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub net_flow: Decimal,
    pub deal_count: usize,
}

/// The same counterparty trading the same security on the same side across
/// two or more disclosed deals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatActivity {
    pub investor: String,
    pub symbol: String,
    pub side: DealSide,
    pub deal_count: usize,
    pub total_value: Decimal,
    pub avg_price: Decimal,
    /// Dates the combination occurred, ascending.
    pub dates: Vec<NaiveDate>,
}

/// The full fan-out result: every analytical view over one deal set.
///
/// Plain data, recomputed on every request and never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealFlowReport {
    pub kpis: KpiSummary,
    pub sectors: Vec<SectorBreakdown>,
    pub stocks: Vec<StockBreakdown>,
    pub investors: Vec<InvestorBreakdown>,
    pub trend: Vec<DailyTrend>,
    pub repeat_activity: Vec<RepeatActivity>,
}
