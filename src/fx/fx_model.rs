use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the externally-sourced exchange rates the engine prices with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRates {
    /// USD/TRY: lira per dollar.
    pub usd_try: Decimal,
    /// EUR/USD: dollars per euro.
    pub eur_usd: Decimal,
    /// GBP/USD: dollars per pound.
    pub gbp_usd: Decimal,
}
