//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money, Movement};

use super::movement::format_movement_register;

/// Format a list of accounts as a table with a total row
///
/// `total` comes from the caller, which already computed it without
/// overflowing.
pub fn format_account_list(accounts: &[Account], total: Money, currency: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:>14}  {}\n",
        "ID", "Bank", "Balance", "Status"
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:->14}  {:-<8}\n",
        "", "", "", ""
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:>14}  {}\n",
            account.id.to_string(),
            account.bank.to_string(),
            account.balance.format_with_symbol(currency),
            account.status
        ));
    }

    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:->14}  {:-<8}\n",
        "", "", "", ""
    ));
    output.push_str(&format!(
        "{:<12}  {:<10}  {:>14}\n",
        "TOTAL",
        "",
        total.format_with_symbol(currency)
    ));

    output
}

/// Format a single account with its movements
pub fn format_account_details(account: &Account, movements: &[Movement], currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.bank));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!("  Status:   {}\n", account.status));
    output.push_str(&format!(
        "  Balance:  {}\n",
        account.balance.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');
    output.push_str(&format!("Movements ({}):\n", movements.len()));
    output.push_str(&format_movement_register(movements, None, currency));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bank, MovementKind};
    use chrono::NaiveDate;

    #[test]
    fn test_format_account_list() {
        let mut closed = Account::new(Bank::Inter, Money::zero());
        closed.deactivate();
        let accounts = vec![Account::new(Bank::Nubank, Money::from_cents(10050)), closed];

        let output = format_account_list(&accounts, Money::from_cents(10050), "$");
        assert!(output.contains("Nubank"));
        assert!(output.contains("$100.50"));
        assert!(output.contains("Inactive"));
        assert!(output.contains("TOTAL"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(
            format_account_list(&[], Money::zero(), "$"),
            "No accounts found.\n"
        );
    }

    #[test]
    fn test_format_account_details() {
        let account = Account::new(Bank::Santander, Money::from_cents(500));
        let movement = Movement::new(
            account.id,
            MovementKind::Inflow,
            Money::from_cents(500),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );

        let output = format_account_details(&account, &[movement], "$");
        assert!(output.contains("Account: Santander"));
        assert!(output.contains("Active"));
        assert!(output.contains("Movements (1):"));
        assert!(output.contains("2025-06-01"));
    }
}
