use log::warn;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::market_data::{PriceQuote, QuoteCurrency};

use super::fx_model::ExchangeRates;

/// How one unit of a held asset converts into a USD price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationRule {
    /// Turkish lira cash: one unit is worth 1 / (USD/TRY).
    Lira,
    /// US dollar cash: one unit is worth exactly one dollar.
    UsDollar,
    /// Euro cash: valued at the EUR/USD rate.
    Euro,
    /// Pound sterling cash: valued at the GBP/USD rate.
    Pound,
    /// Anything else: valued at its supplied market quote.
    Quoted,
}

static VALUATION_RULES: OnceLock<HashMap<&'static str, ValuationRule>> = OnceLock::new();

fn get_rules() -> &'static HashMap<&'static str, ValuationRule> {
    VALUATION_RULES.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert("TRY", ValuationRule::Lira);
        map.insert("USD", ValuationRule::UsDollar);
        map.insert("EUR", ValuationRule::Euro);
        map.insert("GBP", ValuationRule::Pound);

        map
    })
}

/// Returns the valuation rule for a normalized symbol. Symbols without a
/// dedicated rule fall through to [`ValuationRule::Quoted`].
pub fn valuation_rule(symbol: &str) -> ValuationRule {
    get_rules()
        .get(symbol)
        .copied()
        .unwrap_or(ValuationRule::Quoted)
}

/// Resolves the current USD unit price for one asset.
///
/// Currency holdings derive their price from the exchange-rate snapshot;
/// every other asset uses its market quote, converted out of TRY when the
/// quote is lira-denominated. A missing quote values the position at zero.
pub fn unit_price_usd(
    symbol: &str,
    quote: Option<&PriceQuote>,
    rates: &ExchangeRates,
) -> Decimal {
    match valuation_rule(symbol) {
        ValuationRule::Lira => {
            if rates.usd_try.is_zero() {
                Decimal::ZERO
            } else {
                Decimal::ONE / rates.usd_try
            }
        }
        ValuationRule::UsDollar => Decimal::ONE,
        ValuationRule::Euro => rates.eur_usd,
        ValuationRule::Pound => rates.gbp_usd,
        ValuationRule::Quoted => match quote {
            Some(quote) => match quote.currency {
                QuoteCurrency::Usd => quote.price,
                QuoteCurrency::Try => {
                    if rates.usd_try.is_zero() {
                        Decimal::ZERO
                    } else {
                        quote.price / rates.usd_try
                    }
                }
            },
            None => {
                warn!("No market quote for {}. Valuing position at zero.", symbol);
                Decimal::ZERO
            }
        },
    }
}
