use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month-end portfolio valuation on the historical curve.
///
/// Past months are valued with the prices the transaction log itself carried
/// at the time, so the curve does not retroactively change when current
/// prices move; only the current month reflects live market data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyValuePoint {
    /// Calendar month, formatted `YYYY-MM`.
    pub month: String,
    pub value_usd: Decimal,
    pub value_try: Decimal,
}
