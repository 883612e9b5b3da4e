//! Storage layer for bankbook
//!
//! Accounts and movements live in one JSON document so that a balance change
//! and the movement explaining it are written together. [`Storage`] is the
//! handle callers pass around; all mutation goes through
//! [`Storage::transaction`].

pub mod accounts;
pub mod file_io;
pub mod movements;

pub use accounts::AccountStore;
pub use file_io::{read_json, write_json_atomic};
pub use movements::MovementLedger;

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::config::paths::BankbookPaths;
use crate::error::{BankbookError, BankbookResult};

/// Everything persisted in `ledger.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub accounts: AccountStore,
    #[serde(default)]
    pub movements: MovementLedger,
}

impl LedgerData {
    /// Cross-record checks that serde can't do on its own
    fn validate(&self) -> BankbookResult<()> {
        if let Some(orphan) = self
            .movements
            .iter()
            .find(|m| !self.accounts.contains(m.account_id))
        {
            return Err(BankbookError::Storage(format!(
                "movement {} references unknown account {}",
                orphan.id, orphan.account_id
            )));
        }
        Ok(())
    }
}

/// Handle to the ledger: in-memory state plus its file on disk
pub struct Storage {
    ledger_path: PathBuf,
    state: RwLock<LedgerData>,
}

impl Storage {
    /// Create a storage handle with empty state; call [`Storage::load`] to
    /// read what is on disk
    pub fn new(paths: BankbookPaths) -> Result<Self, BankbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger_path: paths.ledger_file(),
            state: RwLock::new(LedgerData::default()),
        })
    }

    /// Create a handle and load the ledger from disk
    pub fn open(paths: BankbookPaths) -> Result<Self, BankbookError> {
        let storage = Self::new(paths)?;
        storage.load()?;
        Ok(storage)
    }

    /// Replace in-memory state with the ledger file (empty if missing)
    pub fn load(&self) -> Result<(), BankbookError> {
        let data: LedgerData = read_json(&self.ledger_path)?;
        data.validate()?;

        let mut state = self.state.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        tracing::debug!(
            accounts = data.accounts.len(),
            movements = data.movements.len(),
            "loaded ledger"
        );
        *state = data;
        Ok(())
    }

    /// Write the current state to disk
    pub fn save(&self) -> Result<(), BankbookError> {
        let state = self.state.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.ledger_path, &*state)
    }

    /// Whether a ledger file exists yet
    pub fn is_initialized(&self) -> bool {
        self.ledger_path.exists()
    }

    /// Run `f` against committed state under the read lock
    pub fn read<T, F>(&self, f: F) -> BankbookResult<T>
    where
        F: FnOnce(&LedgerData) -> BankbookResult<T>,
    {
        let state = self.state.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        f(&state)
    }

    /// Run `f` as one atomic unit
    ///
    /// `f` works on a copy of the state while the write lock is held. If it
    /// returns `Ok`, the copy is written to disk and then becomes the live
    /// state. If `f` fails, or the write fails, nothing changes in memory or
    /// on disk. Holding the write lock throughout serializes transactions.
    pub fn transaction<T, F>(&self, f: F) -> BankbookResult<T>
    where
        F: FnOnce(&mut LedgerData) -> BankbookResult<T>,
    {
        let mut state = self.state.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut working = state.clone();
        let value = f(&mut working)?;

        write_json_atomic(&self.ledger_path, &working)?;
        *state = working;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bank, Money, Movement, MovementKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());

        storage.save().unwrap();
        assert!(storage.is_initialized());
    }

    #[test]
    fn test_committed_transaction_persists() {
        let (temp_dir, storage) = create_test_storage();

        let account = storage
            .transaction(|data| data.accounts.create(Bank::Nubank, Money::from_units(10)))
            .unwrap();

        let paths = BankbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let reopened = Storage::open(paths).unwrap();
        let loaded = reopened.read(|data| data.accounts.get(account.id)).unwrap();
        assert_eq!(loaded, account);
    }

    #[test]
    fn test_failed_transaction_leaves_no_trace() {
        let (_temp_dir, storage) = create_test_storage();

        let result: BankbookResult<()> = storage.transaction(|data| {
            data.accounts.create(Bank::Inter, Money::zero())?;
            Err(BankbookError::Validation("abort".into()))
        });
        assert!(result.is_err());

        let count = storage.read(|data| Ok(data.accounts.len())).unwrap();
        assert_eq!(count, 0);
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_failed_write_rolls_back_memory() {
        let (temp_dir, storage) = create_test_storage();
        storage.save().unwrap();

        let tmp = temp_dir.path().join("data").join("ledger.json.tmp");
        std::fs::create_dir(&tmp).unwrap();

        let result = storage.transaction(|data| data.accounts.create(Bank::Inter, Money::zero()));
        assert!(matches!(result, Err(BankbookError::Storage(_))));
        assert_eq!(storage.read(|data| Ok(data.accounts.len())).unwrap(), 0);
    }

    #[test]
    fn test_load_rejects_orphan_movements() {
        let (temp_dir, storage) = create_test_storage();
        let account = storage
            .transaction(|data| data.accounts.create(Bank::Santander, Money::zero()))
            .unwrap();

        let mut data = storage.read(|data| Ok(data.clone())).unwrap();
        data.movements.append(Movement::new(
            crate::models::AccountId::new(),
            MovementKind::Inflow,
            Money::from_cents(1),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ));
        write_json_atomic(temp_dir.path().join("data").join("ledger.json"), &data).unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, BankbookError::Storage(_)));
        // The failed load kept the previous state
        assert!(storage.read(|data| data.accounts.get(account.id)).is_ok());
    }
}
