use crate::report::{
    DailyTrend, DealFlowReport, InvestorBreakdown, KpiSummary, MostActiveStock, RepeatActivity,
    SectorBreakdown, StockBreakdown,
};
use chrono::NaiveDate;
use core_types::{Deal, DealSide};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// Hard cap on the repeat-activity ranking. The view is a "top movers"
/// panel, not a full listing.
pub const MAX_REPEAT_ACTIVITIES: usize = 20;

/// How many distinct buyer/seller names a stock row retains.
pub const MAX_TOP_COUNTERPARTIES: usize = 5;

/// How many distinct sectors an investor row retains as "preferred".
pub const MAX_PREFERRED_SECTORS: usize = 3;

/// A stateless calculator deriving every analytical view from a deal set.
///
/// All methods are pure functions of the input slice: they share no state,
/// never mutate a `Deal`, and may run in any order (or concurrently).
/// Aggregation is total; there are no error modes, and an empty slice
/// produces well-defined empty or zeroed results.
#[derive(Debug, Default)]
pub struct DealFlowEngine {}

impl DealFlowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the full fan-out: every aggregator over the same immutable slice.
    pub fn analyze(&self, deals: &[Deal]) -> DealFlowReport {
        tracing::debug!(deal_count = deals.len(), "running deal-flow analysis");

        DealFlowReport {
            kpis: self.kpi_summary(deals),
            sectors: self.sector_breakdown(deals),
            stocks: self.stock_breakdown(deals),
            investors: self.investor_breakdown(deals),
            trend: self.daily_trend(deals),
            repeat_activity: self.repeat_activity(deals),
        }
    }

    /// Top-line totals and the most active stock, in one linear pass.
    ///
    /// The most active stock is ranked by deal count, with ties broken by
    /// first encounter in iteration order.
    pub fn kpi_summary(&self, deals: &[Deal]) -> KpiSummary {
        let mut summary = KpiSummary::new();

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut activity: Vec<MostActiveStock> = Vec::new();

        for deal in deals {
            summary.total_deals += 1;
            match deal.side {
                DealSide::Buy => {
                    summary.total_buying += deal.value;
                    summary.buy_deals += 1;
                }
                DealSide::Sell => {
                    summary.total_selling += deal.value;
                    summary.sell_deals += 1;
                }
            }

            let slot = group_slot(&mut index, &mut activity, &deal.symbol, || MostActiveStock {
                symbol: deal.symbol.clone(),
                display_name: deal.display_name.clone(),
                deal_count: 0,
                total_value: Decimal::ZERO,
            });
            activity[slot].deal_count += 1;
            activity[slot].total_value += deal.value;
        }

        summary.net_flow = summary.total_buying - summary.total_selling;

        // Strictly-greater comparison keeps the first-encountered symbol on ties.
        summary.most_active_stock = activity.into_iter().fold(None, |best, candidate| match best {
            Some(b) if candidate.deal_count <= b.deal_count => Some(b),
            _ => Some(candidate),
        });

        summary
    }

    /// Per-sector roll-up, sorted descending by combined traded value.
    pub fn sector_breakdown(&self, deals: &[Deal]) -> Vec<SectorBreakdown> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<SectorBreakdown> = Vec::new();

        for deal in deals {
            let slot = group_slot(&mut index, &mut rows, &deal.sector, || SectorBreakdown {
                sector: deal.sector.clone(),
                buy_value: Decimal::ZERO,
                sell_value: Decimal::ZERO,
                net_flow: Decimal::ZERO,
                deal_count: 0,
                percentage: Decimal::ZERO,
            });
            let row = &mut rows[slot];
            row.deal_count += 1;
            match deal.side {
                DealSide::Buy => row.buy_value += deal.value,
                DealSide::Sell => row.sell_value += deal.value,
            }
        }

        // Second pass: ratios that need the grand total.
        let grand_total: Decimal = rows.iter().map(|r| r.buy_value + r.sell_value).sum();
        for row in &mut rows {
            row.net_flow = row.buy_value - row.sell_value;
            if grand_total > Decimal::ZERO {
                row.percentage =
                    (row.buy_value + row.sell_value) / grand_total * Decimal::ONE_HUNDRED;
            }
        }

        rows.sort_by(|a, b| (b.buy_value + b.sell_value).cmp(&(a.buy_value + a.sell_value)));
        rows
    }

    /// Per-stock roll-up, sorted descending by combined traded value.
    pub fn stock_breakdown(&self, deals: &[Deal]) -> Vec<StockBreakdown> {
        struct StockAcc {
            row: StockBreakdown,
            buy_price_sum: Decimal,
            sell_price_sum: Decimal,
            buyers: Vec<String>,
            sellers: Vec<String>,
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<StockAcc> = Vec::new();

        for deal in deals {
            let slot = group_slot(&mut index, &mut groups, &deal.symbol, || StockAcc {
                row: StockBreakdown {
                    symbol: deal.symbol.clone(),
                    display_name: deal.display_name.clone(),
                    sector: deal.sector.clone(),
                    buy_value: Decimal::ZERO,
                    sell_value: Decimal::ZERO,
                    net_flow: Decimal::ZERO,
                    deal_count: 0,
                    buy_deals: 0,
                    sell_deals: 0,
                    avg_buy_price: Decimal::ZERO,
                    avg_sell_price: Decimal::ZERO,
                    top_buyers: Vec::new(),
                    top_sellers: Vec::new(),
                },
                buy_price_sum: Decimal::ZERO,
                sell_price_sum: Decimal::ZERO,
                buyers: Vec::new(),
                sellers: Vec::new(),
            });

            let group = &mut groups[slot];
            group.row.deal_count += 1;
            match deal.side {
                DealSide::Buy => {
                    group.row.buy_value += deal.value;
                    group.row.buy_deals += 1;
                    group.buy_price_sum += deal.price;
                    push_distinct(&mut group.buyers, &deal.client_name);
                }
                DealSide::Sell => {
                    group.row.sell_value += deal.value;
                    group.row.sell_deals += 1;
                    group.sell_price_sum += deal.price;
                    push_distinct(&mut group.sellers, &deal.client_name);
                }
            }
        }

        let mut rows: Vec<StockBreakdown> = groups
            .into_iter()
            .map(|mut group| {
                group.row.net_flow = group.row.buy_value - group.row.sell_value;
                if group.row.buy_deals > 0 {
                    group.row.avg_buy_price =
                        group.buy_price_sum / Decimal::from(group.row.buy_deals);
                }
                if group.row.sell_deals > 0 {
                    group.row.avg_sell_price =
                        group.sell_price_sum / Decimal::from(group.row.sell_deals);
                }
                group.buyers.truncate(MAX_TOP_COUNTERPARTIES);
                group.sellers.truncate(MAX_TOP_COUNTERPARTIES);
                group.row.top_buyers = group.buyers;
                group.row.top_sellers = group.sellers;
                group.row
            })
            .collect();

        rows.sort_by(|a, b| (b.buy_value + b.sell_value).cmp(&(a.buy_value + a.sell_value)));
        rows
    }

    /// Per-counterparty roll-up, sorted descending by total traded value.
    pub fn investor_breakdown(&self, deals: &[Deal]) -> Vec<InvestorBreakdown> {
        struct InvestorAcc {
            row: InvestorBreakdown,
            stocks: HashSet<String>,
            sectors: Vec<String>,
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<InvestorAcc> = Vec::new();

        for deal in deals {
            let slot = group_slot(&mut index, &mut groups, &deal.client_name, || InvestorAcc {
                row: InvestorBreakdown {
                    client_name: deal.client_name.clone(),
                    investor_class: classifier::classify(&deal.client_name),
                    total_value: Decimal::ZERO,
                    buy_value: Decimal::ZERO,
                    sell_value: Decimal::ZERO,
                    net_flow: Decimal::ZERO,
                    deal_count: 0,
                    buy_deals: 0,
                    sell_deals: 0,
                    stocks_traded: 0,
                    preferred_sectors: Vec::new(),
                    avg_deal_size: Decimal::ZERO,
                },
                stocks: HashSet::new(),
                sectors: Vec::new(),
            });

            let group = &mut groups[slot];
            group.row.total_value += deal.value;
            group.row.deal_count += 1;
            group.stocks.insert(deal.symbol.clone());
            push_distinct(&mut group.sectors, &deal.sector);
            match deal.side {
                DealSide::Buy => {
                    group.row.buy_value += deal.value;
                    group.row.buy_deals += 1;
                }
                DealSide::Sell => {
                    group.row.sell_value += deal.value;
                    group.row.sell_deals += 1;
                }
            }
        }

        let mut rows: Vec<InvestorBreakdown> = groups
            .into_iter()
            .map(|mut group| {
                group.row.net_flow = group.row.buy_value - group.row.sell_value;
                group.row.stocks_traded = group.stocks.len();
                group.sectors.truncate(MAX_PREFERRED_SECTORS);
                group.row.preferred_sectors = group.sectors;
                // deal_count is at least 1 for any materialized group.
                group.row.avg_deal_size =
                    group.row.total_value / Decimal::from(group.row.deal_count);
                group.row
            })
            .collect();

        rows.sort_by(|a, b| b.total_value.cmp(&a.total_value));
        rows
    }

    /// Daily buy/sell/net flow, ascending by date.
    pub fn daily_trend(&self, deals: &[Deal]) -> Vec<DailyTrend> {
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();
        let mut rows: Vec<DailyTrend> = Vec::new();

        for deal in deals {
            let slot = match index.get(&deal.date) {
                Some(&slot) => slot,
                None => {
                    index.insert(deal.date, rows.len());
                    rows.push(DailyTrend {
                        date: deal.date,
                        buy_value: Decimal::ZERO,
                        sell_value: Decimal::ZERO,
                        net_flow: Decimal::ZERO,
                        deal_count: 0,
                    });
                    rows.len() - 1
                }
            };
            let row = &mut rows[slot];
            row.deal_count += 1;
            match deal.side {
                DealSide::Buy => row.buy_value += deal.value,
                DealSide::Sell => row.sell_value += deal.value,
            }
        }

        for row in &mut rows {
            row.net_flow = row.buy_value - row.sell_value;
        }
        rows.sort_by_key(|row| row.date);
        rows
    }

    /// Repeat combinations of (counterparty, symbol, side), ranked descending
    /// by occurrence count and capped at `MAX_REPEAT_ACTIVITIES`.
    ///
    /// A singleton combination is not repeat activity and never appears.
    pub fn repeat_activity(&self, deals: &[Deal]) -> Vec<RepeatActivity> {
        struct ActivityAcc {
            row: RepeatActivity,
            price_sum: Decimal,
        }

        let mut index: HashMap<(String, String, DealSide), usize> = HashMap::new();
        let mut groups: Vec<ActivityAcc> = Vec::new();

        for deal in deals {
            let key = (deal.client_name.clone(), deal.symbol.clone(), deal.side);
            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    index.insert(key, groups.len());
                    groups.push(ActivityAcc {
                        row: RepeatActivity {
                            investor: deal.client_name.clone(),
                            symbol: deal.symbol.clone(),
                            side: deal.side,
                            deal_count: 0,
                            total_value: Decimal::ZERO,
                            avg_price: Decimal::ZERO,
                            dates: Vec::new(),
                        },
                        price_sum: Decimal::ZERO,
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[slot];
            group.row.deal_count += 1;
            group.row.total_value += deal.value;
            group.price_sum += deal.price;
            group.row.dates.push(deal.date);
        }

        let mut rows: Vec<RepeatActivity> = groups
            .into_iter()
            .filter(|group| group.row.deal_count >= 2)
            .map(|mut group| {
                group.row.avg_price = group.price_sum / Decimal::from(group.row.deal_count);
                group.row.dates.sort();
                group.row
            })
            .collect();

        rows.sort_by(|a, b| b.deal_count.cmp(&a.deal_count));
        rows.truncate(MAX_REPEAT_ACTIVITIES);
        rows
    }
}

/// Returns the slot of `key`'s group, materializing it on first encounter.
/// Groups live in a `Vec` so first-seen order survives for stable sorting
/// and tie-breaking.
fn group_slot<T>(
    index: &mut HashMap<String, usize>,
    groups: &mut Vec<T>,
    key: &str,
    make: impl FnOnce() -> T,
) -> usize {
    match index.get(key) {
        Some(&slot) => slot,
        None => {
            index.insert(key.to_string(), groups.len());
            groups.push(make());
            groups.len() - 1
        }
    }
}

/// Appends `name` if it is not already present, preserving encounter order.
fn push_distinct(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{DealKind, InvestorClass};
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn deal(
        id: i64,
        day: &str,
        symbol: &str,
        client: &str,
        side: DealSide,
        quantity: u64,
        price: Decimal,
    ) -> Deal {
        Deal {
            id,
            date: date(day),
            symbol: symbol.to_string(),
            display_name: symbol.to_string(),
            client_name: client.to_string(),
            side,
            kind: DealKind::Bulk,
            quantity,
            price,
            value: Decimal::from(quantity) * price,
            exchange: "NSE".to_string(),
            sector: match symbol {
                "RELIANCE" | "ONGC" => "Oil & Gas".to_string(),
                "TCS" | "INFY" => "IT".to_string(),
                _ => "Others".to_string(),
            },
        }
    }

    /// Scenario: two buys of RELIANCE by the same mutual fund.
    fn acme_deals() -> Vec<Deal> {
        vec![
            deal(1, "2024-01-10", "RELIANCE", "Acme Mutual Fund", DealSide::Buy, 100, dec!(10)),
            deal(2, "2024-01-11", "RELIANCE", "Acme Mutual Fund", DealSide::Buy, 50, dec!(20)),
        ]
    }

    #[test]
    fn kpi_totals_for_two_buys() {
        let engine = DealFlowEngine::new();
        let kpis = engine.kpi_summary(&acme_deals());

        assert_eq!(kpis.total_buying, dec!(2000));
        assert_eq!(kpis.total_selling, Decimal::ZERO);
        assert_eq!(kpis.net_flow, dec!(2000));
        assert_eq!(kpis.total_deals, 2);
        assert_eq!(kpis.buy_deals, 2);
        assert_eq!(kpis.sell_deals, 0);

        let most_active = kpis.most_active_stock.unwrap();
        assert_eq!(most_active.symbol, "RELIANCE");
        assert_eq!(most_active.deal_count, 2);
        assert_eq!(most_active.total_value, dec!(2000));
    }

    #[test]
    fn stock_rollup_averages_prices_per_side() {
        let engine = DealFlowEngine::new();
        let stocks = engine.stock_breakdown(&acme_deals());

        assert_eq!(stocks.len(), 1);
        let reliance = &stocks[0];
        assert_eq!(reliance.buy_deals, 2);
        assert_eq!(reliance.sell_deals, 0);
        assert_eq!(reliance.avg_buy_price, dec!(15));
        assert_eq!(reliance.avg_sell_price, Decimal::ZERO);
        assert_eq!(reliance.top_buyers, vec!["Acme Mutual Fund".to_string()]);
        assert!(reliance.top_sellers.is_empty());
    }

    #[test]
    fn investor_rollup_classifies_and_counts() {
        let engine = DealFlowEngine::new();
        let investors = engine.investor_breakdown(&acme_deals());

        assert_eq!(investors.len(), 1);
        let acme = &investors[0];
        assert_eq!(acme.investor_class, InvestorClass::Dii);
        assert_eq!(acme.deal_count, 2);
        assert_eq!(acme.stocks_traded, 1);
        assert_eq!(acme.avg_deal_size, dec!(1000));
        assert_eq!(acme.preferred_sectors, vec!["Oil & Gas".to_string()]);
    }

    #[test]
    fn repeat_activity_captures_the_double_buy() {
        let engine = DealFlowEngine::new();
        let repeats = engine.repeat_activity(&acme_deals());

        assert_eq!(repeats.len(), 1);
        let repeat = &repeats[0];
        assert_eq!(repeat.investor, "Acme Mutual Fund");
        assert_eq!(repeat.symbol, "RELIANCE");
        assert_eq!(repeat.side, DealSide::Buy);
        assert_eq!(repeat.deal_count, 2);
        assert_eq!(repeat.avg_price, dec!(15));
        assert_eq!(repeat.dates, vec![date("2024-01-10"), date("2024-01-11")]);
    }

    #[test]
    fn zero_quantity_sell_is_counted_but_worthless() {
        let engine = DealFlowEngine::new();
        let deals = vec![deal(1, "2024-01-10", "TCS", "Someone", DealSide::Sell, 0, dec!(50))];

        let kpis = engine.kpi_summary(&deals);
        assert_eq!(kpis.total_selling, Decimal::ZERO);
        assert_eq!(kpis.sell_deals, 1);

        let stocks = engine.stock_breakdown(&deals);
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].sell_deals, 1);
        assert_eq!(stocks[0].sell_value, Decimal::ZERO);
        // The disclosed price still feeds the per-side average.
        assert_eq!(stocks[0].avg_sell_price, dec!(50));

        // With a zero grand total there is no share to apportion.
        let sectors = engine.sector_breakdown(&deals);
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].deal_count, 1);
        assert_eq!(sectors[0].percentage, Decimal::ZERO);
    }

    #[test]
    fn empty_input_yields_zeroed_views_without_error() {
        let engine = DealFlowEngine::new();
        let report = engine.analyze(&[]);

        assert_eq!(report.kpis, KpiSummary::new());
        assert!(report.kpis.most_active_stock.is_none());
        assert!(report.sectors.is_empty());
        assert!(report.stocks.is_empty());
        assert!(report.investors.is_empty());
        assert!(report.trend.is_empty());
        assert!(report.repeat_activity.is_empty());
    }

    #[test]
    fn most_active_tie_breaks_to_first_encountered() {
        let engine = DealFlowEngine::new();
        // TCS and RELIANCE both have one deal; RELIANCE has more value but
        // TCS appears first, and the ranking is by count alone.
        let deals = vec![
            deal(1, "2024-01-10", "TCS", "A", DealSide::Buy, 10, dec!(1)),
            deal(2, "2024-01-10", "RELIANCE", "B", DealSide::Buy, 1000, dec!(100)),
        ];
        let most_active = engine.kpi_summary(&deals).most_active_stock.unwrap();
        assert_eq!(most_active.symbol, "TCS");
    }

    #[test]
    fn rollup_values_reconcile_with_kpi_totals() {
        let engine = DealFlowEngine::new();
        let deals = vec![
            deal(1, "2024-01-10", "RELIANCE", "Acme Mutual Fund", DealSide::Buy, 100, dec!(10)),
            deal(2, "2024-01-10", "TCS", "Morgan Intl", DealSide::Sell, 200, dec!(5)),
            deal(3, "2024-01-11", "INFY", "Sharma Family Trust", DealSide::Buy, 30, dec!(7)),
            deal(4, "2024-01-12", "ONGC", "Retail Guy", DealSide::Sell, 5, dec!(3)),
        ];
        let kpis = engine.kpi_summary(&deals);

        let sectors = engine.sector_breakdown(&deals);
        let sector_buy: Decimal = sectors.iter().map(|s| s.buy_value).sum();
        let sector_sell: Decimal = sectors.iter().map(|s| s.sell_value).sum();
        assert_eq!(sector_buy, kpis.total_buying);
        assert_eq!(sector_sell, kpis.total_selling);

        let stocks = engine.stock_breakdown(&deals);
        let stock_buy: Decimal = stocks.iter().map(|s| s.buy_value).sum();
        let stock_sell: Decimal = stocks.iter().map(|s| s.sell_value).sum();
        assert_eq!(stock_buy, kpis.total_buying);
        assert_eq!(stock_sell, kpis.total_selling);

        // Sector shares of a non-empty set always total 100%.
        let pct_total: Decimal = sectors.iter().map(|s| s.percentage).sum();
        assert_eq!(pct_total.round_dp(6), dec!(100));
    }

    #[test]
    fn trend_is_ordered_ascending_by_date() {
        let engine = DealFlowEngine::new();
        let deals = vec![
            deal(1, "2024-01-12", "TCS", "A", DealSide::Buy, 10, dec!(2)),
            deal(2, "2024-01-10", "TCS", "B", DealSide::Sell, 10, dec!(2)),
            deal(3, "2024-01-11", "INFY", "C", DealSide::Buy, 10, dec!(2)),
            deal(4, "2024-01-10", "INFY", "D", DealSide::Buy, 10, dec!(2)),
        ];
        let trend = engine.daily_trend(&deals);

        assert_eq!(trend.len(), 3);
        assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(trend[0].deal_count, 2);
        assert_eq!(trend[0].net_flow, Decimal::ZERO);
    }

    #[test]
    fn repeat_activity_excludes_singletons() {
        let engine = DealFlowEngine::new();
        let deals = vec![
            // Same client and symbol but opposite sides: two singletons.
            deal(1, "2024-01-10", "TCS", "A", DealSide::Buy, 10, dec!(2)),
            deal(2, "2024-01-11", "TCS", "A", DealSide::Sell, 10, dec!(2)),
            // A genuine repeat.
            deal(3, "2024-01-10", "INFY", "B", DealSide::Buy, 10, dec!(2)),
            deal(4, "2024-01-12", "INFY", "B", DealSide::Buy, 10, dec!(2)),
        ];
        let repeats = engine.repeat_activity(&deals);

        assert_eq!(repeats.len(), 1);
        assert!(repeats.iter().all(|r| r.deal_count >= 2));
        assert_eq!(repeats[0].investor, "B");
    }

    #[test]
    fn repeat_activity_is_capped_at_twenty() {
        let engine = DealFlowEngine::new();
        let mut deals = Vec::new();
        let mut id = 0;
        for i in 0..25 {
            let client = format!("Client {i}");
            for _ in 0..2 {
                id += 1;
                deals.push(deal(id, "2024-01-10", "TCS", &client, DealSide::Buy, 1, dec!(1)));
            }
        }
        let repeats = engine.repeat_activity(&deals);
        assert_eq!(repeats.len(), MAX_REPEAT_ACTIVITIES);
    }

    #[test]
    fn top_counterparties_are_first_five_distinct_in_order() {
        let engine = DealFlowEngine::new();
        let mut deals = Vec::new();
        for i in 0..7 {
            deals.push(deal(
                i,
                "2024-01-10",
                "TCS",
                &format!("Buyer {i}"),
                DealSide::Buy,
                1,
                dec!(1),
            ));
        }
        // A duplicate of an early buyer must not consume a slot.
        deals.push(deal(99, "2024-01-11", "TCS", "Buyer 0", DealSide::Buy, 1, dec!(1)));

        let stocks = engine.stock_breakdown(&deals);
        let expected: Vec<String> = (0..5).map(|i| format!("Buyer {i}")).collect();
        assert_eq!(stocks[0].top_buyers, expected);
    }

    #[test]
    fn rerunning_aggregators_is_idempotent() {
        let engine = DealFlowEngine::new();
        let deals = vec![
            deal(1, "2024-01-10", "RELIANCE", "Acme Mutual Fund", DealSide::Buy, 100, dec!(10)),
            deal(2, "2024-01-10", "TCS", "Morgan Intl", DealSide::Sell, 200, dec!(5)),
            deal(3, "2024-01-11", "RELIANCE", "Acme Mutual Fund", DealSide::Buy, 10, dec!(12)),
        ];
        assert_eq!(engine.analyze(&deals), engine.analyze(&deals));
    }

    #[test]
    fn descending_sorts_keep_insertion_order_on_ties() {
        let engine = DealFlowEngine::new();
        // Two sectors with identical combined value.
        let deals = vec![
            deal(1, "2024-01-10", "TCS", "A", DealSide::Buy, 10, dec!(5)),
            deal(2, "2024-01-10", "RELIANCE", "B", DealSide::Buy, 10, dec!(5)),
        ];
        let sectors = engine.sector_breakdown(&deals);
        assert_eq!(sectors[0].sector, "IT");
        assert_eq!(sectors[1].sector, "Oil & Gas");
    }
}
