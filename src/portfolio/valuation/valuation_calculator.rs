use chrono::{DateTime, Duration, NaiveTime, Utc};
use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::{MIN_INVESTED_THRESHOLD, QUANTITY_THRESHOLD};
use crate::portfolio::performance::{compute_xirr, CashFlow};
use crate::transactions::{Transaction, TransactionType};

use super::valuation_model::AssetStats;

/// Computes holdings, cost basis, realized and total profit, and annualized
/// money-weighted return for one asset's transaction history, valued at the
/// supplied current USD price and USD/TRY rate.
///
/// The transactions are expected to share one normalized asset symbol; the
/// calculator does not filter. An empty slice yields the all-zero record.
pub fn compute_asset_stats(
    transactions: &[Transaction],
    current_price_usd: Decimal,
    usd_try_rate: Decimal,
) -> AssetStats {
    compute_asset_stats_as_of(transactions, current_price_usd, usd_try_rate, Utc::now())
}

/// Deterministic variant of [`compute_asset_stats`] with an explicit
/// valuation instant. Identical inputs produce bit-identical output.
pub fn compute_asset_stats_as_of(
    transactions: &[Transaction],
    current_price_usd: Decimal,
    usd_try_rate: Decimal,
    as_of: DateTime<Utc>,
) -> AssetStats {
    if transactions.is_empty() {
        return AssetStats::default();
    }

    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    // Stable: same-instant entries keep their input order.
    ordered.sort_by_key(|transaction| transaction.date);

    debug!(
        "Valuing {} with {} transactions as of {}",
        ordered[0].asset,
        ordered.len(),
        as_of
    );

    let mut total_amount = Decimal::ZERO;
    let mut total_cost_usd = Decimal::ZERO;
    let mut total_cost_try = Decimal::ZERO;
    let mut total_invested_usd = Decimal::ZERO;
    let mut total_invested_try = Decimal::ZERO;
    let mut realized_profit_usd = Decimal::ZERO;
    let mut realized_profit_try = Decimal::ZERO;
    let mut cashflows: Vec<CashFlow> = Vec::with_capacity(ordered.len() + 1);

    for transaction in &ordered {
        let total_usd = transaction.total_usd();
        let total_try = transaction.total_try();

        match transaction.transaction_type {
            TransactionType::Buy => {
                total_amount += transaction.amount;
                total_cost_usd += total_usd;
                total_cost_try += total_try;
                total_invested_usd += total_usd;
                total_invested_try += total_try;
                cashflows.push(CashFlow {
                    amount: -decimal_to_f64(total_usd),
                    when: midnight(transaction.date),
                });
            }
            TransactionType::Sell => {
                let sold = transaction.amount.min(total_amount);
                if sold < transaction.amount {
                    warn!(
                        "Sell of {} {} exceeds held {}; excess treated as zero-cost inventory.",
                        transaction.amount, transaction.asset, total_amount
                    );
                }
                // Cost of goods sold at the running average unit cost,
                // tracked in USD and TRY independently.
                let (cogs_usd, cogs_try) = if total_amount > Decimal::ZERO {
                    let average_usd = total_cost_usd / total_amount;
                    let average_try = total_cost_try / total_amount;
                    (average_usd * sold, average_try * sold)
                } else {
                    (Decimal::ZERO, Decimal::ZERO)
                };
                realized_profit_usd += total_usd - cogs_usd;
                realized_profit_try += total_try - cogs_try;
                total_cost_usd -= cogs_usd;
                total_cost_try -= cogs_try;
                total_amount -= sold;
                cashflows.push(CashFlow {
                    amount: decimal_to_f64(total_usd),
                    when: midnight(transaction.date),
                });
            }
        }
    }

    let total_value_usd = total_amount * current_price_usd;
    let total_value_try = total_value_usd * usd_try_rate;

    if total_amount > QUANTITY_THRESHOLD {
        // The open position counts as a hypothetical liquidation at the
        // valuation instant, which is what lets the money-weighted return
        // see unrealized performance.
        cashflows.push(CashFlow {
            amount: decimal_to_f64(total_value_usd),
            when: end_of_day(as_of),
        });
    }

    let xirr = compute_xirr(&cashflows);

    // The TRY profit figure is authoritative; the USD figure is the TRY
    // profit converted at the current rate. Tracking the two independently
    // would let them drift apart.
    let profit_try = (total_value_try - total_cost_try) + realized_profit_try;
    let profit_usd = if usd_try_rate.is_zero() {
        Decimal::ZERO
    } else {
        profit_try / usd_try_rate
    };

    let average_cost_usd = if total_amount > QUANTITY_THRESHOLD {
        total_cost_usd / total_amount
    } else {
        Decimal::ZERO
    };
    let profit_ratio = if total_invested_usd > MIN_INVESTED_THRESHOLD {
        profit_usd / total_invested_usd
    } else {
        Decimal::ZERO
    };
    let profit_ratio_try = if total_invested_try > MIN_INVESTED_THRESHOLD {
        profit_try / total_invested_try
    } else {
        Decimal::ZERO
    };

    let days_in_portfolio = (as_of.date_naive() - ordered[0].date.date_naive()).num_days();

    AssetStats {
        total_amount,
        total_cost_usd,
        total_cost_try,
        average_cost_usd,
        total_value_usd,
        total_value_try,
        realized_profit_usd,
        realized_profit_try,
        profit_usd,
        profit_try,
        profit_ratio,
        profit_ratio_try,
        xirr,
        days_in_portfolio,
    }
}

fn midnight(when: DateTime<Utc>) -> DateTime<Utc> {
    when.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(when: DateTime<Utc>) -> DateTime<Utc> {
    midnight(when) + Duration::seconds(86_399)
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
