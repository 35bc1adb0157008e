use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransactionError>;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Invalid transaction data: {0}")]
    InvalidData(String),

    #[error("Unsupported transaction type: {0}")]
    UnsupportedType(String),
}
