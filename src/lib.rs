//! Bankbook - balances across a fixed set of bank accounts
//!
//! This library keeps one account per bank, applies deposits, withdrawals
//! and transfers atomically, and keeps a dated history of movements for
//! reporting and export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, movements, money)
//! - `storage`: Account store, movement ledger and the JSON file they live in
//! - `services`: The balance engine, the only writer of balances
//! - `reports`: Per-bank balance summaries
//! - `export`: CSV export of movements
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use bankbook::config::BankbookPaths;
//! use bankbook::models::{Bank, Money};
//! use bankbook::services::BalanceEngine;
//! use bankbook::storage::Storage;
//!
//! let storage = Storage::open(BankbookPaths::new()?)?;
//! let engine = BalanceEngine::new(&storage);
//! let nubank = engine.create_account(Bank::Nubank, Money::from_units(100))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BankbookError, BankbookResult};
