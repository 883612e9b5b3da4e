//! Movement display formatting

use std::collections::HashMap;

use crate::models::{AccountId, Bank, Movement, MovementKind};

/// Format one movement as a register row
pub fn format_movement_row(movement: &Movement, bank: Option<Bank>, currency: &str) -> String {
    let arrow = match movement.kind {
        MovementKind::Inflow => "+",
        MovementKind::Outflow => "-",
    };
    let owner = match bank {
        Some(bank) => bank.to_string(),
        None => movement.account_id.to_string(),
    };

    format!(
        "{:<12}  {}  {:<12}  {:<7}  {}{:>13}",
        movement.id.to_string(),
        movement.date.format("%Y-%m-%d"),
        owner,
        movement.kind.to_string(),
        arrow,
        movement.amount.format_with_symbol(currency)
    )
}

/// Format movements as a register
///
/// `banks` maps account ids to banks so rows can show the bank name; ids
/// missing from the map are printed as-is.
pub fn format_movement_register(
    movements: &[Movement],
    banks: Option<&HashMap<AccountId, Bank>>,
    currency: &str,
) -> String {
    if movements.is_empty() {
        return "No movements found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<12}  {:<7}  {:>14}\n",
        "ID", "Date", "Account", "Kind", "Amount"
    ));
    output.push_str(&"-".repeat(63));
    output.push('\n');

    for movement in movements {
        let bank = banks.and_then(|b| b.get(&movement.account_id).copied());
        output.push_str(&format_movement_row(movement, bank, currency));
        output.push('\n');
    }

    output
}
