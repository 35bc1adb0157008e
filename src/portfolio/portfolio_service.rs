use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;

use crate::fx::{unit_price_usd, ExchangeRates};
use crate::market_data::PriceQuote;
use crate::transactions::{group_by_asset, Transaction};

use super::portfolio_model::{AssetPerformance, PortfolioStats};
use super::valuation::compute_asset_stats_as_of;

/// Values the whole transaction log: groups it by normalized asset symbol,
/// resolves each group's current USD price, runs the valuation calculator
/// per group, and aggregates portfolio totals.
pub fn compute_portfolio_stats(
    transactions: &[Transaction],
    current_prices: &HashMap<String, PriceQuote>,
    rates: &ExchangeRates,
) -> PortfolioStats {
    compute_portfolio_stats_as_of(transactions, current_prices, rates, Utc::now())
}

/// Deterministic variant of [`compute_portfolio_stats`] with an explicit
/// valuation instant.
pub fn compute_portfolio_stats_as_of(
    transactions: &[Transaction],
    current_prices: &HashMap<String, PriceQuote>,
    rates: &ExchangeRates,
    as_of: DateTime<Utc>,
) -> PortfolioStats {
    let groups = group_by_asset(transactions);
    debug!("Valuing {} asset groups", groups.len());

    let mut portfolio = PortfolioStats::default();
    for (symbol, group) in groups {
        let price_usd = unit_price_usd(&symbol, current_prices.get(&symbol), rates);
        let stats = compute_asset_stats_as_of(&group, price_usd, rates.usd_try, as_of);

        portfolio.total_value_usd += stats.total_value_usd;
        portfolio.total_value_try += stats.total_value_try;
        portfolio.total_profit_usd += stats.profit_usd;
        portfolio.total_profit_try += stats.profit_try;
        portfolio.total_realized_profit_usd += stats.realized_profit_usd;
        portfolio.total_realized_profit_try += stats.realized_profit_try;
        portfolio.assets.push(AssetPerformance { symbol, stats });
    }
    portfolio
}
