//! Balance engine
//!
//! The operations that change balances. Each one runs inside a single
//! [`Storage::transaction`], so a failure at any step leaves accounts and
//! movements exactly as they were.

use chrono::NaiveDate;

use crate::error::{BankbookError, BankbookResult};
use crate::models::{Account, AccountId, Bank, Money, Movement, MovementKind};
use crate::storage::Storage;

/// Service for balance-changing operations and balance queries
pub struct BalanceEngine<'a> {
    storage: &'a Storage,
    reject_inactive: bool,
}

/// Balances of both sides after a transfer
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub source: Account,
    pub destination: Account,
    pub amount: Money,
}

impl<'a> BalanceEngine<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            reject_inactive: false,
        }
    }

    /// Refuse movements and transfers touching inactive accounts
    ///
    /// Off by default: inactive accounts still accept movements unless this
    /// is turned on.
    pub fn reject_inactive(mut self, reject: bool) -> Self {
        self.reject_inactive = reject;
        self
    }

    /// Open an account at `bank` with a non-negative starting balance
    pub fn create_account(&self, bank: Bank, initial_balance: Money) -> BankbookResult<Account> {
        if initial_balance.is_negative() {
            tracing::debug!(%bank, %initial_balance, "rejected negative opening balance");
            return Err(BankbookError::InvalidAmount(initial_balance));
        }

        let account = self
            .storage
            .transaction(|data| data.accounts.create(bank, initial_balance))
            .inspect_err(|e| log_failure("create_account", &bank, e))?;

        tracing::info!(account = %account.id, %bank, balance = %account.balance, "account created");
        Ok(account)
    }

    /// Deactivate an empty account
    ///
    /// The zero-balance check and the status change happen in the same
    /// transaction.
    pub fn deactivate_account(&self, id: AccountId) -> BankbookResult<Account> {
        let account = self
            .storage
            .transaction(|data| data.accounts.deactivate(id))
            .inspect_err(|e| log_failure("deactivate_account", &id, e))?;

        tracing::info!(account = %id, bank = %account.bank, "account deactivated");
        Ok(account)
    }

    /// Move `amount` from one account to another
    ///
    /// Both balances are written in one commit; a debit without its credit
    /// is never visible. Transfers do not record movements.
    pub fn transfer(
        &self,
        source_id: AccountId,
        dest_id: AccountId,
        amount: Money,
    ) -> BankbookResult<TransferResult> {
        if !amount.is_positive() {
            return Err(BankbookError::InvalidAmount(amount));
        }
        if source_id == dest_id {
            return Err(BankbookError::SameAccount(source_id));
        }

        let result = self
            .storage
            .transaction(|data| {
                let source = data.accounts.get(source_id)?;
                self.ensure_usable(&source)?;
                if source.balance < amount {
                    return Err(BankbookError::InsufficientFunds {
                        account: source_id,
                        needed: amount,
                        available: source.balance,
                    });
                }

                let destination = data.accounts.get(dest_id)?;
                self.ensure_usable(&destination)?;
                let credited = destination
                    .balance
                    .checked_add(amount)
                    .ok_or_else(|| overflow(dest_id))?;

                let debited = source
                    .balance
                    .checked_sub(amount)
                    .ok_or_else(|| overflow(source_id))?;
                let source = data.accounts.set_balance(source_id, debited)?;
                let destination = data.accounts.set_balance(dest_id, credited)?;

                Ok(TransferResult {
                    source,
                    destination,
                    amount,
                })
            })
            .inspect_err(|e| log_failure("transfer", &source_id, e))?;

        tracing::info!(
            from = %source_id,
            to = %dest_id,
            %amount,
            "transfer committed"
        );
        Ok(result)
    }

    /// Deposit into or withdraw from an account, recording a movement
    ///
    /// The balance update and the movement record are committed together.
    pub fn apply_movement(
        &self,
        account_id: AccountId,
        kind: MovementKind,
        amount: Money,
        date: NaiveDate,
    ) -> BankbookResult<Movement> {
        if !amount.is_positive() {
            return Err(BankbookError::InvalidAmount(amount));
        }

        let movement = self
            .storage
            .transaction(|data| {
                let account = data.accounts.get(account_id)?;
                self.ensure_usable(&account)?;

                let new_balance = match kind {
                    MovementKind::Inflow => account
                        .balance
                        .checked_add(amount)
                        .ok_or_else(|| overflow(account_id))?,
                    MovementKind::Outflow => {
                        if account.balance < amount {
                            return Err(BankbookError::InsufficientFunds {
                                account: account_id,
                                needed: amount,
                                available: account.balance,
                            });
                        }
                        account
                            .balance
                            .checked_sub(amount)
                            .ok_or_else(|| overflow(account_id))?
                    }
                };

                data.accounts.set_balance(account_id, new_balance)?;
                Ok(data
                    .movements
                    .append(Movement::new(account_id, kind, amount, date)))
            })
            .inspect_err(|e| log_failure("apply_movement", &account_id, e))?;

        tracing::info!(
            account = %account_id,
            movement = %movement.id,
            %kind,
            %amount,
            %date,
            "movement recorded"
        );
        Ok(movement)
    }

    /// Sum of balances over every account, active and inactive
    pub fn total_balance(&self) -> BankbookResult<Money> {
        self.storage.read(|data| data.accounts.total_balance())
    }

    /// Movements dated within `start..=end`, ascending by date
    pub fn movements_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BankbookResult<Vec<Movement>> {
        if start > end {
            return Err(BankbookError::InvalidRange { start, end });
        }
        self.storage
            .read(|data| Ok(data.movements.query_by_date_range(start, end)))
    }

    /// Movements of a single account, ascending by date
    pub fn movements_for(&self, account_id: AccountId) -> BankbookResult<Vec<Movement>> {
        self.storage.read(|data| {
            data.accounts.get(account_id)?;
            Ok(data.movements.for_account(account_id))
        })
    }

    /// All accounts regardless of status, in creation order
    pub fn list_accounts(&self) -> BankbookResult<Vec<Account>> {
        self.storage.read(|data| Ok(data.accounts.list_all()))
    }

    pub fn get_account(&self, id: AccountId) -> BankbookResult<Account> {
        self.storage.read(|data| data.accounts.get(id))
    }

    /// Resolve a bank name or an account id (full or `acc-xxxxxxxx`)
    pub fn find_account(&self, identifier: &str) -> BankbookResult<Account> {
        self.storage.read(|data| {
            let found = match Bank::parse(identifier) {
                Some(bank) => data.accounts.find_by_bank(bank),
                None => data.accounts.find_by_id_str(identifier)?,
            };
            found.ok_or_else(|| BankbookError::account_not_found(identifier.trim()))
        })
    }

    fn ensure_usable(&self, account: &Account) -> BankbookResult<()> {
        if self.reject_inactive && !account.is_active() {
            return Err(BankbookError::InactiveAccount(account.id));
        }
        Ok(())
    }
}

/// Rejections go to the caller and are only traced at debug level; I/O,
/// lock and serialization failures are logged as errors.
fn log_failure(operation: &str, subject: &dyn std::fmt::Display, error: &BankbookError) {
    if error.is_business_rule() || matches!(error, BankbookError::Validation(_)) {
        tracing::debug!(operation, subject = %subject, %error, "operation rejected");
    } else {
        tracing::error!(operation, subject = %subject, %error, "operation failed");
    }
}

fn overflow(account: AccountId) -> BankbookError {
    BankbookError::Validation(format!("balance of account {} would overflow", account))
}
