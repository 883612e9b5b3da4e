//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::BankbookResult;
use crate::storage::Storage;

use super::{engine_for, parse_bank, parse_money};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open an account at a bank (nubank, santander, inter)
    Create {
        /// Bank name
        bank: String,
        /// Opening balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts, active and inactive
    List,
    /// Show an account and its movements
    Show {
        /// Bank name or account ID
        account: String,
    },
    /// Deactivate an account with a zero balance
    Deactivate {
        /// Bank name or account ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> BankbookResult<()> {
    let engine = engine_for(storage, settings);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create { bank, balance } => {
            let bank = parse_bank(&bank)?;
            let balance = parse_money(&balance)?;
            let account = engine.create_account(bank, balance)?;

            println!("Created account: {}", account.bank);
            println!("  Balance: {}", account.balance.format_with_symbol(currency));
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let accounts = engine.list_accounts()?;
            let total = engine.total_balance()?;
            print!("{}", format_account_list(&accounts, total, currency));
        }

        AccountCommands::Show { account } => {
            let found = engine.find_account(&account)?;
            let movements = engine.movements_for(found.id)?;
            print!("{}", format_account_details(&found, &movements, currency));
        }

        AccountCommands::Deactivate { account } => {
            let found = engine.find_account(&account)?;
            let account = engine.deactivate_account(found.id)?;
            println!("Deactivated account: {} ({})", account.bank, account.id);
        }
    }

    Ok(())
}
