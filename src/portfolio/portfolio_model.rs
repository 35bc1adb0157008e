use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::valuation::AssetStats;

/// Valuation results for one asset group within the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetPerformance {
    pub symbol: String,
    pub stats: AssetStats,
}

/// Whole-portfolio aggregate: per-asset statistics plus cross-asset totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    /// Per-asset results, ordered by symbol.
    pub assets: Vec<AssetPerformance>,
    pub total_value_usd: Decimal,
    pub total_value_try: Decimal,
    pub total_profit_usd: Decimal,
    pub total_profit_try: Decimal,
    pub total_realized_profit_usd: Decimal,
    pub total_realized_profit_try: Decimal,
}
