//! Reports module for bankbook
//!
//! Read-only views over the ledger for rendering totals and charts.

pub mod balances;

pub use balances::{BalanceReport, BankBalance};
