pub(crate) mod transactions_errors;
pub(crate) mod transactions_model;

pub use transactions_errors::TransactionError;
pub use transactions_model::{group_by_asset, normalize_symbol, Transaction, TransactionType};
