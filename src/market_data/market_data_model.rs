use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency a market quote is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteCurrency {
    Usd,
    Try,
}

/// Latest known market price for one asset, supplied by an external price
/// source (manual entry or a fetch integration). The engine treats it as an
/// opaque oracle value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price: Decimal,
    pub currency: QuoteCurrency,
}

impl PriceQuote {
    pub fn usd(price: Decimal) -> Self {
        PriceQuote {
            price,
            currency: QuoteCurrency::Usd,
        }
    }

    pub fn try_denominated(price: Decimal) -> Self {
        PriceQuote {
            price,
            currency: QuoteCurrency::Try,
        }
    }
}
