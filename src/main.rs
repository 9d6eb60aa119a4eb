use analytics::{DealFlowEngine, DealFlowReport};
use chrono::{Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use core_types::{DateRange, Deal, DealKind};
use deal_store::{load_deals, RestDealStore};
use sectors::StaticSectorMap;
use tracing_subscriber::EnvFilter;

/// The main entry point for the deal-flow analytics application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Analytics over institutional bulk/block deal disclosures.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch disclosures for a date range and print the analytical views.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The start date of the range (format: YYYY-MM-DD).
    /// Defaults to the configured lookback window ending today.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// The end date of the range (format: YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Restrict the analysis to one disclosure feed.
    #[arg(long, value_enum, default_value_t = DealTypeArg::All)]
    deal_type: DealTypeArg,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DealTypeArg {
    All,
    Bulk,
    Block,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of one analysis request: fetch, filter, fan-out.
async fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = configuration::load_config()?;

    let to = args.to.unwrap_or_else(|| Utc::now().date_naive());
    let from = args
        .from
        .unwrap_or(to - Duration::days(i64::from(config.analysis.lookback_days)));
    let range = DateRange::new(from, to)?;

    let store = RestDealStore::new(&config.store);
    let sectors = StaticSectorMap::new();

    let deals = load_deals(&store, &sectors, &range).await?;
    let deals = filter_by_kind(deals, args.deal_type);
    tracing::info!(deals = deals.len(), "analyzing deal set");

    let report = DealFlowEngine::new().analyze(&deals);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => render_report(&range, &report),
    }

    Ok(())
}

fn filter_by_kind(deals: Vec<Deal>, filter: DealTypeArg) -> Vec<Deal> {
    let kind = match filter {
        DealTypeArg::All => return deals,
        DealTypeArg::Bulk => DealKind::Bulk,
        DealTypeArg::Block => DealKind::Block,
    };
    deals.into_iter().filter(|deal| deal.kind == kind).collect()
}

// ==============================================================================
// Table Rendering
// ==============================================================================

/// How many roll-up rows each printed table shows. JSON output is complete.
const TABLE_ROW_LIMIT: usize = 10;

fn render_report(range: &DateRange, report: &DealFlowReport) {
    println!("Deal-flow analysis for {} to {}\n", range.start, range.end);

    let mut kpis = Table::new();
    kpis.load_preset(UTF8_FULL).set_header(vec![
        "Total Buying",
        "Total Selling",
        "Net Flow",
        "Deals (Buy/Sell)",
        "Most Active Stock",
    ]);
    let most_active = report
        .kpis
        .most_active_stock
        .as_ref()
        .map(|s| format!("{} ({} deals)", s.symbol, s.deal_count))
        .unwrap_or_else(|| "-".to_string());
    kpis.add_row(vec![
        report.kpis.total_buying.to_string(),
        report.kpis.total_selling.to_string(),
        report.kpis.net_flow.to_string(),
        format!(
            "{} ({}/{})",
            report.kpis.total_deals, report.kpis.buy_deals, report.kpis.sell_deals
        ),
        most_active,
    ]);
    println!("{kpis}\n");

    let mut sectors = Table::new();
    sectors.load_preset(UTF8_FULL).set_header(vec![
        "Sector", "Buy Value", "Sell Value", "Net Flow", "Deals", "Share %",
    ]);
    for row in report.sectors.iter().take(TABLE_ROW_LIMIT) {
        sectors.add_row(vec![
            row.sector.clone(),
            row.buy_value.to_string(),
            row.sell_value.to_string(),
            row.net_flow.to_string(),
            row.deal_count.to_string(),
            row.percentage.round_dp(2).to_string(),
        ]);
    }
    println!("Sector breakdown\n{sectors}\n");

    let mut stocks = Table::new();
    stocks.load_preset(UTF8_FULL).set_header(vec![
        "Symbol",
        "Sector",
        "Buy Value",
        "Sell Value",
        "Net Flow",
        "Avg Buy",
        "Avg Sell",
        "Top Buyers",
    ]);
    for row in report.stocks.iter().take(TABLE_ROW_LIMIT) {
        stocks.add_row(vec![
            row.symbol.clone(),
            row.sector.clone(),
            row.buy_value.to_string(),
            row.sell_value.to_string(),
            row.net_flow.to_string(),
            row.avg_buy_price.round_dp(2).to_string(),
            row.avg_sell_price.round_dp(2).to_string(),
            row.top_buyers.join(", "),
        ]);
    }
    println!("Stock breakdown\n{stocks}\n");

    let mut investors = Table::new();
    investors.load_preset(UTF8_FULL).set_header(vec![
        "Investor",
        "Class",
        "Total Value",
        "Net Flow",
        "Deals",
        "Stocks",
        "Avg Deal Size",
        "Preferred Sectors",
    ]);
    for row in report.investors.iter().take(TABLE_ROW_LIMIT) {
        investors.add_row(vec![
            row.client_name.clone(),
            row.investor_class.to_string(),
            row.total_value.to_string(),
            row.net_flow.to_string(),
            row.deal_count.to_string(),
            row.stocks_traded.to_string(),
            row.avg_deal_size.round_dp(2).to_string(),
            row.preferred_sectors.join(", "),
        ]);
    }
    println!("Investor breakdown\n{investors}\n");

    let mut trend = Table::new();
    trend.load_preset(UTF8_FULL).set_header(vec![
        "Date", "Buy Value", "Sell Value", "Net Flow", "Deals",
    ]);
    for row in &report.trend {
        trend.add_row(vec![
            row.date.to_string(),
            row.buy_value.to_string(),
            row.sell_value.to_string(),
            row.net_flow.to_string(),
            row.deal_count.to_string(),
        ]);
    }
    println!("Daily trend\n{trend}\n");

    let mut repeats = Table::new();
    repeats.load_preset(UTF8_FULL).set_header(vec![
        "Investor", "Symbol", "Side", "Count", "Total Value", "Avg Price", "Dates",
    ]);
    for row in &report.repeat_activity {
        let dates: Vec<String> = row.dates.iter().map(|d| d.to_string()).collect();
        repeats.add_row(vec![
            row.investor.clone(),
            row.symbol.clone(),
            row.side.to_string(),
            row.deal_count.to_string(),
            row.total_value.to_string(),
            row.avg_price.round_dp(2).to_string(),
            dates.join(", "),
        ]);
    }
    println!("Repeat activity (top {})\n{repeats}", report.repeat_activity.len());
}
