//! Custom error types for bankbook
//!
//! Business-rule failures (insufficient funds, duplicate bank, ...) and
//! infrastructure failures (I/O, JSON, storage) share one error enum so every
//! operation returns a single typed result.

use thiserror::Error;

use crate::models::{AccountId, Bank, Money};

/// The main error type for bankbook operations
#[derive(Error, Debug)]
pub enum BankbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed user input (unknown bank, bad date, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An account already exists for this bank
    #[error("An account already exists for bank {0}")]
    DuplicateBank(Bank),

    /// Deactivation attempted while money is still in the account
    #[error("Account {account} still holds {balance}; only empty accounts can be deactivated")]
    NonZeroBalance { account: AccountId, balance: Money },

    /// Withdrawal or transfer exceeds the account balance
    #[error("Insufficient funds in account {account}: need {needed}, have {available}")]
    InsufficientFunds {
        account: AccountId,
        needed: Money,
        available: Money,
    },

    /// Amount was zero or negative where a positive amount is required
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Date range end before start
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer from account {0} to itself")]
    SameAccount(AccountId),

    /// Movement rejected because the account has been deactivated
    #[error("Account {0} is inactive")]
    InactiveAccount(AccountId),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BankbookError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error reflects an invalid business state rather than an
    /// infrastructure fault
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::DuplicateBank(_)
                | Self::NonZeroBalance { .. }
                | Self::InsufficientFunds { .. }
                | Self::InvalidAmount(_)
                | Self::InvalidRange { .. }
                | Self::SameAccount(_)
                | Self::InactiveAccount(_)
        )
    }
}

impl From<std::io::Error> for BankbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BankbookError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for bankbook operations
pub type BankbookResult<T> = Result<T, BankbookError>;
