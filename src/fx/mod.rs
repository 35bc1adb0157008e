pub(crate) mod currency;
pub(crate) mod fx_model;

pub use currency::{unit_price_usd, valuation_rule, ValuationRule};
pub use fx_model::ExchangeRates;
