//! # Deal-Flow Analytics Engine
//!
//! This crate turns a normalized set of disclosed deals into the classified,
//! aggregated, and ranked views consumed by reporting layers: top-line KPIs,
//! sector/stock/investor roll-ups, a daily trend series, and repeat-activity
//! patterns.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** no I/O, no persistence, no knowledge of where the
//!   deals came from. It depends only on `core-types` and `classifier`.
//! - **Stateless fan-out:** every aggregator is an independent, pure function
//!   of the same immutable `&[Deal]`. Re-running any of them on unchanged
//!   input yields identical output, and none depends on another's result.
//!
//! ## Public API
//!
//! - `DealFlowEngine`: the stateless calculator holding the aggregation logic.
//! - `DealFlowReport` and its row types: the plain-data outputs.

pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::DealFlowEngine;
pub use report::{
    DailyTrend, DealFlowReport, InvestorBreakdown, KpiSummary, MostActiveStock, RepeatActivity,
    SectorBreakdown, StockBreakdown,
};
