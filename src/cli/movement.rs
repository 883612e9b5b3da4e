//! Movement CLI commands

use std::collections::HashMap;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::movement::format_movement_register;
use crate::error::{BankbookError, BankbookResult};
use crate::models::MovementKind;
use crate::storage::Storage;

use super::{engine_for, parse_date, parse_money};

/// Movement subcommands
#[derive(Subcommand)]
pub enum MovementCommands {
    /// Record a deposit or withdrawal
    Add {
        /// Bank name or account ID
        account: String,
        /// inflow (deposit) or outflow (withdrawal)
        kind: String,
        /// Amount (e.g., "25.00")
        amount: String,
        /// Movement date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List movements between two dates (inclusive)
    List {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
}

/// Handle a movement command
pub fn handle_movement_command(
    storage: &Storage,
    settings: &Settings,
    cmd: MovementCommands,
) -> BankbookResult<()> {
    let engine = engine_for(storage, settings);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        MovementCommands::Add {
            account,
            kind,
            amount,
            date,
        } => {
            let found = engine.find_account(&account)?;
            let kind = MovementKind::parse(&kind).ok_or_else(|| {
                BankbookError::Validation(format!(
                    "Invalid movement kind: '{}'. Use inflow or outflow",
                    kind
                ))
            })?;
            let amount = parse_money(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let movement = engine.apply_movement(found.id, kind, amount, date)?;
            let balance = engine.get_account(found.id)?.balance;

            println!(
                "Recorded {} of {} on {} for {}",
                movement.kind,
                movement.amount.format_with_symbol(currency),
                movement.date.format(&settings.date_format),
                found.bank
            );
            println!("  New balance: {}", balance.format_with_symbol(currency));
            println!("  ID: {}", movement.id);
        }

        MovementCommands::List { from, to } => {
            let start = parse_date(&from)?;
            let end = parse_date(&to)?;
            let movements = engine.movements_between(start, end)?;
            let banks: HashMap<_, _> = engine
                .list_accounts()?
                .into_iter()
                .map(|a| (a.id, a.bank))
                .collect();

            print!(
                "{}",
                format_movement_register(&movements, Some(&banks), currency)
            );
        }
    }

    Ok(())
}
