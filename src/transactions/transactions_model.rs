use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use uuid::Uuid;

use super::transactions_errors::{Result, TransactionError};

/// Direction of a portfolio transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            other => Err(TransactionError::UnsupportedType(other.to_string())),
        }
    }
}

/// Domain model representing one entry in the transaction log.
///
/// Prices are entered in TRY together with the USD/TRY rate observed at
/// transaction time; the USD figures are derived from those two, so both
/// currencies can be tracked without a rate lookup at valuation time.
/// `asset` must hold a normalized symbol (see [`normalize_symbol`]) before
/// the transaction enters any calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    pub asset: String,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub price_try: Decimal,
    pub usd_rate: Decimal,
}

impl Transaction {
    /// Creates a transaction with a generated id and a normalized symbol.
    pub fn new(
        transaction_type: TransactionType,
        asset: &str,
        date: DateTime<Utc>,
        amount: Decimal,
        price_try: Decimal,
        usd_rate: Decimal,
    ) -> Self {
        Transaction {
            id: Uuid::new_v4().to_string(),
            transaction_type,
            asset: normalize_symbol(asset),
            date,
            amount,
            price_try,
            usd_rate,
        }
    }

    /// Total transaction value in TRY.
    pub fn total_try(&self) -> Decimal {
        self.amount * self.price_try
    }

    /// Unit price in USD at the transaction-time exchange rate.
    pub fn price_usd(&self) -> Decimal {
        if self.usd_rate.is_zero() {
            Decimal::ZERO
        } else {
            self.price_try / self.usd_rate
        }
    }

    /// Total transaction value in USD at the transaction-time exchange rate.
    pub fn total_usd(&self) -> Decimal {
        if self.usd_rate.is_zero() {
            Decimal::ZERO
        } else {
            self.total_try() / self.usd_rate
        }
    }

    /// Validates the transaction data before it enters the calculators.
    pub fn validate(&self) -> Result<()> {
        if self.asset.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "Asset symbol cannot be empty".to_string(),
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(format!(
                "Amount must be positive, got {}",
                self.amount
            )));
        }
        if self.price_try <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(format!(
                "Unit price must be positive, got {}",
                self.price_try
            )));
        }
        if self.usd_rate <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(format!(
                "Exchange rate must be positive, got {}",
                self.usd_rate
            )));
        }
        Ok(())
    }
}

/// Normalizes an asset symbol for grouping and price lookups.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Groups a transaction log by normalized asset symbol.
///
/// Alphabetical key order keeps downstream aggregation deterministic.
pub fn group_by_asset(transactions: &[Transaction]) -> BTreeMap<String, Vec<Transaction>> {
    let mut groups: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
    for transaction in transactions {
        groups
            .entry(normalize_symbol(&transaction.asset))
            .or_default()
            .push(transaction.clone());
    }
    groups
}
