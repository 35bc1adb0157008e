use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Quantity threshold for significant positions; anything below is floating dust
pub const QUANTITY_THRESHOLD: Decimal = dec!(0.0001);

/// Invested-capital threshold below which profit ratios are reported as zero
pub const MIN_INVESTED_THRESHOLD: Decimal = dec!(0.01);

/// USD/TRY seed rate for the history replay when no transaction carries a usable rate
pub const FALLBACK_USD_TRY_RATE: Decimal = dec!(30);
