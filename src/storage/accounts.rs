//! Account store
//!
//! Owns the account records. Keeps two indexes next to the insertion-ordered
//! records: id -> position, and bank -> id. The bank index is what enforces
//! one account per bank.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BankbookError, BankbookResult};
use crate::models::{Account, AccountId, Bank, Money};

/// Account records plus lookup indexes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Account>", into = "Vec<Account>")]
pub struct AccountStore {
    accounts: Vec<Account>,
    by_id: HashMap<AccountId, usize>,
    by_bank: HashMap<Bank, AccountId>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new active account for `bank`
    ///
    /// Fails with `DuplicateBank` if any account, active or not, already
    /// exists for that bank.
    pub fn create(&mut self, bank: Bank, initial_balance: Money) -> BankbookResult<Account> {
        if self.by_bank.contains_key(&bank) {
            return Err(BankbookError::DuplicateBank(bank));
        }

        let account = Account::new(bank, initial_balance);
        self.insert(account.clone());
        Ok(account)
    }

    /// All accounts regardless of status, in creation order
    pub fn list_all(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn get(&self, id: AccountId) -> BankbookResult<Account> {
        self.get_ref(id).cloned()
    }

    pub fn find_by_bank(&self, bank: Bank) -> Option<Account> {
        self.by_bank
            .get(&bank)
            .and_then(|id| self.by_id.get(id))
            .map(|&idx| self.accounts[idx].clone())
    }

    /// Find an account by an id given in full or short (`acc-xxxxxxxx`) form
    ///
    /// A short prefix shared by several accounts is a `Validation` error.
    pub fn find_by_id_str(&self, s: &str) -> BankbookResult<Option<Account>> {
        if let Ok(id) = s.parse::<AccountId>() {
            return Ok(self.get(id).ok());
        }

        let mut matches = self.accounts.iter().filter(|a| a.id.matches(s));
        let found = matches.next().cloned();
        let others = matches.count();
        if others > 0 {
            return Err(BankbookError::Validation(format!(
                "Account id '{}' is ambiguous: it matches {} accounts",
                s.trim(),
                others + 1
            )));
        }
        Ok(found)
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Mark an account inactive; the balance must be exactly zero
    pub fn deactivate(&mut self, id: AccountId) -> BankbookResult<Account> {
        let account = self.get_mut(id)?;

        if !account.balance.is_zero() {
            return Err(BankbookError::NonZeroBalance {
                account: id,
                balance: account.balance,
            });
        }

        if account.is_active() {
            account.deactivate();
        }
        Ok(account.clone())
    }

    /// Overwrite an account's balance
    ///
    /// Only the engine calls this, inside a storage transaction, after it has
    /// checked the new balance is not negative.
    pub(crate) fn set_balance(&mut self, id: AccountId, balance: Money) -> BankbookResult<Account> {
        let account = self.get_mut(id)?;
        account.set_balance(balance);
        Ok(account.clone())
    }

    /// Sum of balances over every account, active or not
    pub fn total_balance(&self) -> BankbookResult<Money> {
        Money::checked_sum(self.accounts.iter().map(|a| a.balance)).ok_or_else(|| {
            BankbookError::Validation("total balance does not fit in an amount".to_string())
        })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn get_ref(&self, id: AccountId) -> BankbookResult<&Account> {
        self.by_id
            .get(&id)
            .map(|&idx| &self.accounts[idx])
            .ok_or_else(|| BankbookError::account_not_found(id.to_string()))
    }

    fn get_mut(&mut self, id: AccountId) -> BankbookResult<&mut Account> {
        match self.by_id.get(&id) {
            Some(&idx) => Ok(&mut self.accounts[idx]),
            None => Err(BankbookError::account_not_found(id.to_string())),
        }
    }

    fn insert(&mut self, account: Account) {
        self.by_id.insert(account.id, self.accounts.len());
        self.by_bank.insert(account.bank, account.id);
        self.accounts.push(account);
    }
}

impl TryFrom<Vec<Account>> for AccountStore {
    type Error = BankbookError;

    /// Rebuild the indexes from stored records, refusing a file that breaks
    /// the uniqueness rules
    fn try_from(accounts: Vec<Account>) -> Result<Self, Self::Error> {
        let mut store = AccountStore::new();
        for account in accounts {
            if store.by_id.contains_key(&account.id) {
                return Err(BankbookError::Storage(format!(
                    "duplicate account id {} in ledger",
                    account.id
                )));
            }
            if store.by_bank.contains_key(&account.bank) {
                return Err(BankbookError::Storage(format!(
                    "more than one account for bank {} in ledger",
                    account.bank
                )));
            }
            if account.balance.is_negative() {
                return Err(BankbookError::Storage(format!(
                    "account {} has negative balance {} in ledger",
                    account.id, account.balance
                )));
            }
            store.insert(account);
        }
        Ok(store)
    }
}

impl From<AccountStore> for Vec<Account> {
    fn from(store: AccountStore) -> Self {
        store.accounts
    }
}
