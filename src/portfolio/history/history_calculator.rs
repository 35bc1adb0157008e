use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::constants::FALLBACK_USD_TRY_RATE;
use crate::errors::{Result, ValidationError};
use crate::fx::{unit_price_usd, valuation_rule, ExchangeRates, ValuationRule};
use crate::market_data::PriceQuote;
use crate::transactions::{normalize_symbol, Transaction, TransactionType};

use super::history_model::MonthlyValuePoint;

/// Replays the full transaction log into one valuation point per calendar
/// month, from the first transaction's month through the current month,
/// restricted to the caller's display window.
pub fn reconstruct_monthly_values(
    transactions: &[Transaction],
    current_prices: &HashMap<String, PriceQuote>,
    rates: &ExchangeRates,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<Vec<MonthlyValuePoint>> {
    reconstruct_monthly_values_as_of(
        transactions,
        current_prices,
        rates,
        range_start,
        range_end,
        Utc::now(),
    )
}

/// Deterministic variant of [`reconstruct_monthly_values`] with an explicit
/// "current month" instant.
pub fn reconstruct_monthly_values_as_of(
    transactions: &[Transaction],
    current_prices: &HashMap<String, PriceQuote>,
    rates: &ExchangeRates,
    range_start: NaiveDate,
    range_end: NaiveDate,
    as_of: DateTime<Utc>,
) -> Result<Vec<MonthlyValuePoint>> {
    if range_start > range_end {
        return Err(ValidationError::InvalidInput(
            "Range start must be before range end".to_string(),
        )
        .into());
    }
    if transactions.is_empty() {
        return Ok(Vec::new());
    }

    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|transaction| transaction.date);

    let first = ordered[0];
    let first_month = month_floor(first.date.date_naive());
    let final_month = month_floor(as_of.date_naive());
    let window_start = month_floor(range_start);
    let window_end = month_floor(range_end);

    debug!(
        "Reconstructing monthly values from {} to {} (window {} - {})",
        first_month, final_month, window_start, window_end
    );

    let mut holdings: HashMap<String, Decimal> = HashMap::new();
    let mut last_price_usd: HashMap<String, Decimal> = HashMap::new();
    let mut last_usd_rate = if first.usd_rate.is_zero() {
        FALLBACK_USD_TRY_RATE
    } else {
        first.usd_rate
    };

    let mut points = Vec::new();
    let mut index = 0;
    let mut month = first_month;
    while month <= final_month {
        let is_final = month == final_month;

        // Absorb this month's transactions; the final bucket takes everything
        // left, since "the current month" means "as of now".
        while index < ordered.len() {
            let transaction = ordered[index];
            if !is_final && month_floor(transaction.date.date_naive()) > month {
                break;
            }
            apply_transaction(
                transaction,
                &mut holdings,
                &mut last_price_usd,
                &mut last_usd_rate,
            );
            index += 1;
        }

        if month >= window_start && month <= window_end {
            let point = if is_final {
                value_month_live(&holdings, current_prices, rates, month)
            } else {
                value_month_historical(&holdings, &last_price_usd, last_usd_rate, month)
            };
            points.push(point);
        }

        month = month + Months::new(1);
    }

    Ok(points)
}

fn apply_transaction(
    transaction: &Transaction,
    holdings: &mut HashMap<String, Decimal>,
    last_price_usd: &mut HashMap<String, Decimal>,
    last_usd_rate: &mut Decimal,
) {
    let symbol = normalize_symbol(&transaction.asset);

    let holding = holdings.entry(symbol.clone()).or_insert(Decimal::ZERO);
    match transaction.transaction_type {
        TransactionType::Buy => *holding += transaction.amount,
        TransactionType::Sell => {
            *holding = (*holding - transaction.amount).max(Decimal::ZERO);
        }
    }

    if !transaction.price_try.is_zero() && !transaction.usd_rate.is_zero() {
        last_price_usd.insert(symbol, transaction.price_usd());
    }
    if !transaction.usd_rate.is_zero() {
        *last_usd_rate = transaction.usd_rate;
    }
}

/// Values the current month with live market inputs.
fn value_month_live(
    holdings: &HashMap<String, Decimal>,
    current_prices: &HashMap<String, PriceQuote>,
    rates: &ExchangeRates,
    month: NaiveDate,
) -> MonthlyValuePoint {
    let mut value_usd = Decimal::ZERO;
    for (symbol, amount) in holdings {
        if amount.is_zero() {
            continue;
        }
        value_usd += *amount * unit_price_usd(symbol, current_prices.get(symbol), rates);
    }
    MonthlyValuePoint {
        month: format_month(month),
        value_usd,
        value_try: value_usd * rates.usd_try,
    }
}

/// Values a past month with the prices the replay has seen so far, so the
/// historical curve is immune to later market moves.
fn value_month_historical(
    holdings: &HashMap<String, Decimal>,
    last_price_usd: &HashMap<String, Decimal>,
    last_usd_rate: Decimal,
    month: NaiveDate,
) -> MonthlyValuePoint {
    let mut value_usd = Decimal::ZERO;
    for (symbol, amount) in holdings {
        if amount.is_zero() {
            continue;
        }
        let unit_price = match valuation_rule(symbol) {
            ValuationRule::Lira => {
                if last_usd_rate.is_zero() {
                    Decimal::ZERO
                } else {
                    Decimal::ONE / last_usd_rate
                }
            }
            ValuationRule::UsDollar => Decimal::ONE,
            // Historical months predate the live rate snapshot; EUR and GBP
            // fall back to their last transaction-embedded price like any
            // other asset.
            _ => last_price_usd.get(symbol).copied().unwrap_or(Decimal::ZERO),
        };
        value_usd += *amount * unit_price;
    }
    MonthlyValuePoint {
        month: format_month(month),
        value_usd,
        value_try: value_usd * last_usd_rate,
    }
}

fn month_floor(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn format_month(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
