pub(crate) mod market_data_model;

pub use market_data_model::{PriceQuote, QuoteCurrency};
