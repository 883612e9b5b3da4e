//! Movement model
//!
//! A movement is the append-only record of money entering or leaving one
//! account on a given date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, MovementId};
use super::money::Money;

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Money deposited into the account
    Inflow,
    /// Money withdrawn from the account
    Outflow,
}

impl MovementKind {
    /// Parse a movement kind, accepting deposit/withdrawal as aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "inflow" | "in" | "deposit" => Some(Self::Inflow),
            "outflow" | "out" | "withdrawal" | "withdraw" => Some(Self::Outflow),
            _ => None,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "Inflow"),
            Self::Outflow => write!(f, "Outflow"),
        }
    }
}

/// A recorded deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,

    /// The account whose balance this movement changed
    pub account_id: AccountId,

    pub kind: MovementKind,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    /// Calendar date the movement applies to
    pub date: NaiveDate,

    /// When the movement was recorded
    pub created_at: DateTime<Utc>,
}

impl Movement {
    pub fn new(account_id: AccountId, kind: MovementKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: MovementId::new(),
            account_id,
            kind,
            amount,
            date,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} on {}",
            self.date, self.kind, self.amount, self.account_id
        )
    }
}
