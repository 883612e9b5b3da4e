//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::BankbookResult;
use crate::reports::BalanceReport;
use crate::storage::Storage;

use super::engine_for;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Balance per bank with a bar chart
    Balances {
        /// Leave out inactive accounts
        #[arg(long)]
        active_only: bool,
    },
    /// Total balance across all accounts
    Total,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> BankbookResult<()> {
    let engine = engine_for(storage, settings);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Balances { active_only } => {
            let report = BalanceReport::generate(&engine, active_only)?;
            print!("{}", report.format_terminal(currency));
            if !report.rows.is_empty() {
                println!();
                print!("{}", report.format_chart(currency));
            }
        }
        ReportCommands::Total => {
            let total = engine.total_balance()?;
            println!("Total balance: {}", total.format_with_symbol(currency));
        }
    }

    Ok(())
}
