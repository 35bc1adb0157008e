use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed statistics for one asset's transaction history.
///
/// Recomputed from scratch on every valuation call; there is no persistent
/// identity behind these figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    /// Net holding after all buys and sells, floored at zero.
    pub total_amount: Decimal,
    /// Weighted-average cost basis of the current holding, in USD.
    pub total_cost_usd: Decimal,
    /// Weighted-average cost basis of the current holding, in TRY.
    pub total_cost_try: Decimal,
    /// Average USD cost per unit of the current holding.
    pub average_cost_usd: Decimal,
    pub total_value_usd: Decimal,
    pub total_value_try: Decimal,
    /// Profit crystallized by past sells.
    pub realized_profit_usd: Decimal,
    pub realized_profit_try: Decimal,
    /// Total profit: unrealized on the open position plus realized.
    pub profit_usd: Decimal,
    pub profit_try: Decimal,
    /// Total USD profit over all USD capital ever invested.
    pub profit_ratio: Decimal,
    pub profit_ratio_try: Decimal,
    /// Annualized money-weighted return as a fraction (0.1 = 10%/yr);
    /// zero when no rate is computable.
    pub xirr: f64,
    /// Days between the first transaction and the valuation instant.
    pub days_in_portfolio: i64,
}
