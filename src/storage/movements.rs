//! Movement ledger
//!
//! Append-only list of movements. Nothing here checks balances; the engine
//! appends only after the balance change has been validated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AccountId, Movement};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementLedger {
    movements: Vec<Movement>,
}

impl MovementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement
    pub fn append(&mut self, movement: Movement) -> Movement {
        self.movements.push(movement.clone());
        movement
    }

    /// Movements dated within `start..=end`, ascending by date
    ///
    /// Movements sharing a date keep the order they were recorded in.
    pub fn query_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Movement> {
        let mut found: Vec<_> = self
            .movements
            .iter()
            .filter(|m| m.date >= start && m.date <= end)
            .cloned()
            .collect();
        // Stable sort keeps recording order within a day
        found.sort_by_key(|m| m.date);
        found
    }

    /// Movements of one account, ascending by date
    pub fn for_account(&self, account_id: AccountId) -> Vec<Movement> {
        let mut found: Vec<_> = self
            .movements
            .iter()
            .filter(|m| m.account_id == account_id)
            .cloned()
            .collect();
        found.sort_by_key(|m| m.date);
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movement> {
        self.movements.iter()
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MovementKind};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn inflow(account: AccountId, day: u32, cents: i64) -> Movement {
        Movement::new(account, MovementKind::Inflow, Money::from_cents(cents), date(day))
    }

    #[test]
    fn test_append_returns_record() {
        let mut ledger = MovementLedger::new();
        let movement = inflow(AccountId::new(), 1, 100);
        let stored = ledger.append(movement.clone());
        assert_eq!(stored, movement);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_range_is_inclusive_and_sorted() {
        let mut ledger = MovementLedger::new();
        let account = AccountId::new();
        ledger.append(inflow(account, 20, 1));
        ledger.append(inflow(account, 5, 2));
        ledger.append(inflow(account, 10, 3));
        ledger.append(inflow(account, 4, 4));
        ledger.append(inflow(account, 21, 5));

        let found = ledger.query_by_date_range(date(5), date(20));
        let cents: Vec<_> = found.iter().map(|m| m.amount.cents()).collect();
        assert_eq!(cents, vec![2, 3, 1]);
    }

    #[test]
    fn test_single_day_range() {
        let mut ledger = MovementLedger::new();
        let account = AccountId::new();
        ledger.append(inflow(account, 7, 1));
        ledger.append(inflow(account, 8, 2));
        ledger.append(inflow(account, 7, 3));

        let found = ledger.query_by_date_range(date(7), date(7));
        let cents: Vec<_> = found.iter().map(|m| m.amount.cents()).collect();
        assert_eq!(cents, vec![1, 3]);
    }

    #[test]
    fn test_for_account() {
        let mut ledger = MovementLedger::new();
        let a = AccountId::new();
        let b = AccountId::new();
        ledger.append(inflow(a, 3, 1));
        ledger.append(inflow(b, 2, 2));
        ledger.append(inflow(a, 1, 3));

        let found = ledger.for_account(a);
        let cents: Vec<_> = found.iter().map(|m| m.amount.cents()).collect();
        assert_eq!(cents, vec![3, 1]);
    }
}
