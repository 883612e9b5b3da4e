//! Balance report
//!
//! Per-bank balances with each account's share of the total, rendered as a
//! table or as a horizontal bar chart. Read-only: built from
//! `list_accounts()` and `total_balance()`.

use crate::display::report::{format_bar, separator};
use crate::error::{BankbookError, BankbookResult};
use crate::models::{AccountId, AccountStatus, Bank, Money};
use crate::services::BalanceEngine;

const CHART_WIDTH: usize = 40;

/// One row of the report
#[derive(Debug, Clone)]
pub struct BankBalance {
    pub account_id: AccountId,
    pub bank: Bank,
    pub status: AccountStatus,
    pub balance: Money,
}

/// Balance per bank plus the overall total
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub rows: Vec<BankBalance>,
    /// Sum of the listed rows
    pub total: Money,
    /// Whether inactive accounts were left out
    pub active_only: bool,
}

impl BalanceReport {
    /// Build the report from the engine's read API
    ///
    /// With `active_only` the inactive accounts are skipped and the total
    /// covers the listed rows only; otherwise the total equals
    /// `total_balance()`.
    pub fn generate(engine: &BalanceEngine<'_>, active_only: bool) -> BankbookResult<Self> {
        let rows: Vec<BankBalance> = engine
            .list_accounts()?
            .into_iter()
            .filter(|a| !active_only || a.is_active())
            .map(|a| BankBalance {
                account_id: a.id,
                bank: a.bank,
                status: a.status,
                balance: a.balance,
            })
            .collect();

        let total = if active_only {
            Money::checked_sum(rows.iter().map(|r| r.balance)).ok_or_else(|| {
                BankbookError::Validation("total balance does not fit in an amount".to_string())
            })?
        } else {
            engine.total_balance()?
        };

        Ok(Self {
            rows,
            total,
            active_only,
        })
    }

    /// Share of the total held by `balance`, in percent
    pub fn share(&self, balance: Money) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            balance.as_f64() / self.total.as_f64() * 100.0
        }
    }

    /// Format the report as a table
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Balances by Bank\n");
        output.push_str(&"=".repeat(52));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No accounts found.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:<10} {:>16} {:>10}\n",
            "Bank", "Status", "Balance", "Share"
        ));
        output.push_str(&separator(52));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<12} {:<10} {:>16} {:>9.1}%\n",
                row.bank.to_string(),
                row.status.to_string(),
                row.balance.format_with_symbol(currency),
                self.share(row.balance)
            ));
        }

        output.push_str(&separator(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<23} {:>16}\n",
            "TOTAL",
            self.total.format_with_symbol(currency)
        ));

        output
    }

    /// Format the report as a bar chart scaled to the largest balance
    pub fn format_chart(&self, currency: &str) -> String {
        let max = self
            .rows
            .iter()
            .map(|r| r.balance)
            .max()
            .unwrap_or_default();

        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {} {}\n",
                row.bank.to_string(),
                format_bar(row.balance.as_f64(), max.as_f64(), CHART_WIDTH),
                row.balance.format_with_symbol(currency)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BankbookPaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_report_totals_match_engine() {
        let (_temp_dir, storage) = create_test_storage();
        let engine = BalanceEngine::new(&storage);
        engine
            .create_account(Bank::Nubank, Money::from_units(75))
            .unwrap();
        engine
            .create_account(Bank::Inter, Money::from_units(25))
            .unwrap();

        let report = BalanceReport::generate(&engine, false).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total, engine.total_balance().unwrap());
        assert!((report.share(Money::from_units(75)) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_active_only_skips_inactive() {
        let (_temp_dir, storage) = create_test_storage();
        let engine = BalanceEngine::new(&storage);
        let closed = engine.create_account(Bank::Santander, Money::zero()).unwrap();
        engine
            .create_account(Bank::Nubank, Money::from_units(10))
            .unwrap();
        engine.deactivate_account(closed.id).unwrap();

        let report = BalanceReport::generate(&engine, true).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].bank, Bank::Nubank);

        let all = BalanceReport::generate(&engine, false).unwrap();
        assert_eq!(all.rows.len(), 2);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let (_temp_dir, storage) = create_test_storage();
        let engine = BalanceEngine::new(&storage);
        let near_max = Money::from_cents(i64::MAX / 2 + 1);
        engine.create_account(Bank::Nubank, near_max).unwrap();
        engine.create_account(Bank::Inter, near_max).unwrap();

        for active_only in [true, false] {
            let err = BalanceReport::generate(&engine, active_only).unwrap_err();
            assert!(matches!(err, BankbookError::Validation(_)));
        }
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let engine = BalanceEngine::new(&storage);
        engine
            .create_account(Bank::Nubank, Money::from_cents(1050))
            .unwrap();

        let output = BalanceReport::generate(&engine, false)
            .unwrap()
            .format_terminal("R$");
        assert!(output.contains("Nubank"));
        assert!(output.contains("R$10.50"));
        assert!(output.contains("100.0%"));
        assert!(output.contains("TOTAL"));
    }

    #[test]
    fn test_empty_report() {
        let (_temp_dir, storage) = create_test_storage();
        let engine = BalanceEngine::new(&storage);

        let report = BalanceReport::generate(&engine, false).unwrap();
        assert!(report.format_terminal("$").contains("No accounts found."));
        assert!(report.format_chart("$").is_empty());
        assert_eq!(report.share(Money::zero()), 0.0);
    }

    #[test]
    fn test_chart_scales_to_largest() {
        let (_temp_dir, storage) = create_test_storage();
        let engine = BalanceEngine::new(&storage);
        engine
            .create_account(Bank::Nubank, Money::from_units(100))
            .unwrap();
        engine
            .create_account(Bank::Inter, Money::from_units(50))
            .unwrap();

        let chart = BalanceReport::generate(&engine, false)
            .unwrap()
            .format_chart("$");
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), CHART_WIDTH);
        assert_eq!(lines[1].matches('█').count(), CHART_WIDTH / 2);
    }
}
