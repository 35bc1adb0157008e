pub mod constants;
pub mod errors;
pub mod fx;
pub mod market_data;
pub mod portfolio;
pub mod transactions;

pub use errors::{Error, Result};
pub use portfolio::*;
pub use transactions::*;
