//! CLI command handler for transfers between accounts

use crate::config::Settings;
use crate::error::BankbookResult;
use crate::storage::Storage;

use super::{engine_for, parse_money};

/// Handle the transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    settings: &Settings,
    from: &str,
    to: &str,
    amount: &str,
) -> BankbookResult<()> {
    let engine = engine_for(storage, settings);
    let currency = settings.currency_symbol.as_str();

    let from_account = engine.find_account(from)?;
    let to_account = engine.find_account(to)?;
    let amount = parse_money(amount)?;

    let result = engine.transfer(from_account.id, to_account.id, amount)?;

    println!("Transferred {}:", result.amount.format_with_symbol(currency));
    println!(
        "  From: {} (now {})",
        result.source.bank,
        result.source.balance.format_with_symbol(currency)
    );
    println!(
        "  To:   {} (now {})",
        result.destination.bank,
        result.destination.balance.format_with_symbol(currency)
    );

    Ok(())
}
