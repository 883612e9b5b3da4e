//! CLI command handlers
//!
//! Bridges clap argument parsing with the balance engine. Handlers print
//! their results and return typed errors for `main` to report.

pub mod account;
pub mod export;
pub mod movement;
pub mod report;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use export::{handle_export_command, ExportCommands};
pub use movement::{handle_movement_command, MovementCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transfer::handle_transfer_command;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{BankbookError, BankbookResult};
use crate::models::{Bank, Money};
use crate::services::BalanceEngine;
use crate::storage::Storage;

/// Build an engine honoring the user's settings
pub fn engine_for<'a>(storage: &'a Storage, settings: &Settings) -> BalanceEngine<'a> {
    BalanceEngine::new(storage).reject_inactive(settings.reject_inactive_movements)
}

pub(crate) fn parse_money(input: &str) -> BankbookResult<Money> {
    Money::parse(input).map_err(|e| {
        BankbookError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '100.00' or '100'. Error: {}",
            input, e
        ))
    })
}

pub(crate) fn parse_date(input: &str) -> BankbookResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BankbookError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_bank(input: &str) -> BankbookResult<Bank> {
    Bank::parse(input).ok_or_else(|| {
        BankbookError::Validation(format!(
            "Unknown bank: '{}'. Valid banks: {}",
            input,
            Bank::valid_names()
        ))
    })
}
