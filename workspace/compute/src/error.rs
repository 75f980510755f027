use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for the ledger engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A conversion rate was zero or negative.
    #[error("Invalid rate {rate} for currency {code}")]
    InvalidRate { code: String, rate: Decimal },

    /// The rate table has no entry for the requested currency.
    #[error("Unknown currency: no rate for {0}")]
    UnknownCurrency(String),

    /// A transaction amount was negative where only non-negative values are
    /// allowed; direction is decided by classification, not by sign.
    #[error("Malformed amount {amount} on transaction {transaction_id}")]
    MalformedAmount {
        transaction_id: i32,
        amount: Decimal,
    },
}

/// Type alias for Result with EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
