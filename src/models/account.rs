//! Account model
//!
//! One account per bank. Accounts are never deleted; once emptied they can be
//! deactivated, and deactivation is permanent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// The banks an account can be held at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Nubank,
    Santander,
    Inter,
}

impl Bank {
    /// Every supported bank, in display order
    pub const ALL: [Bank; 3] = [Bank::Nubank, Bank::Santander, Bank::Inter];

    /// Parse a bank from its name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nubank" => Some(Self::Nubank),
            "santander" => Some(Self::Santander),
            "inter" => Some(Self::Inter),
            _ => None,
        }
    }

    /// Comma separated list of bank names, for error messages
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|b| b.to_string().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nubank => write!(f, "Nubank"),
            Self::Santander => write!(f, "Santander"),
            Self::Inter => write!(f, "Inter"),
        }
    }
}

/// Lifecycle state of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A bank account and its current balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Bank holding the account (unique across accounts)
    pub bank: Bank,

    /// Current balance, never negative
    pub balance: Money,

    /// Active or Inactive
    #[serde(default)]
    pub status: AccountStatus,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the balance or status last changed
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new active account
    pub fn new(bank: Bank, balance: Money) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            bank,
            balance,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Replace the balance and bump `updated_at`
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }

    /// Mark the account inactive
    pub fn deactivate(&mut self) {
        self.status = AccountStatus::Inactive;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bank, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let account = Account::new(Bank::Nubank, Money::from_units(100));
        assert_eq!(account.bank, Bank::Nubank);
        assert_eq!(account.balance.cents(), 10000);
        assert!(account.is_active());
    }

    #[test]
    fn test_deactivate() {
        let mut account = Account::new(Bank::Inter, Money::zero());
        account.deactivate();
        assert_eq!(account.status, AccountStatus::Inactive);
        assert!(account.updated_at >= account.created_at);
    }

    #[test]
    fn test_bank_parsing() {
        assert_eq!(Bank::parse("nubank"), Some(Bank::Nubank));
        assert_eq!(Bank::parse("SANTANDER"), Some(Bank::Santander));
        assert_eq!(Bank::parse(" Inter "), Some(Bank::Inter));
        assert_eq!(Bank::parse("itau"), None);
        assert_eq!(Bank::valid_names(), "nubank, santander, inter");
    }

    #[test]
    fn test_serialization() {
        let account = Account::new(Bank::Santander, Money::from_cents(1));
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"bank\":\"santander\""));
        assert!(json.contains("\"status\":\"active\""));
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }

    #[test]
    fn test_display() {
        let account = Account::new(Bank::Nubank, Money::zero());
        assert_eq!(account.to_string(), format!("Nubank ({})", account.id));
    }
}
