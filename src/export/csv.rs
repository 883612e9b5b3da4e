//! CSV export of movements

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::BankbookResult;
use crate::models::{AccountId, Bank, MovementKind};
use crate::services::BalanceEngine;

/// One exported line
#[derive(Debug, Serialize)]
struct MovementRow {
    id: String,
    date: NaiveDate,
    account: String,
    bank: Option<Bank>,
    kind: MovementKind,
    /// Decimal string, e.g. "12.50"
    amount: String,
}

/// Write the movements dated within `start..=end` as CSV
///
/// Returns the number of movements written. Fails with `InvalidRange` when
/// `start > end`, before anything is written.
pub fn export_movements_csv<W: Write>(
    engine: &BalanceEngine<'_>,
    start: NaiveDate,
    end: NaiveDate,
    writer: W,
) -> BankbookResult<usize> {
    let movements = engine.movements_between(start, end)?;
    let banks: HashMap<AccountId, Bank> = engine
        .list_accounts()?
        .into_iter()
        .map(|a| (a.id, a.bank))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    for movement in &movements {
        let amount = movement.amount;
        csv_writer.serialize(MovementRow {
            id: movement.id.as_uuid().to_string(),
            date: movement.date,
            account: movement.account_id.as_uuid().to_string(),
            bank: banks.get(&movement.account_id).copied(),
            kind: movement.kind,
            amount: format!("{}.{:02}", amount.units(), amount.cents_part()),
        })?;
    }

    // Header only, so an empty export is still a valid CSV file
    if movements.is_empty() {
        csv_writer.write_record(["id", "date", "account", "bank", "kind", "amount"])?;
    }

    csv_writer.flush()?;
    tracing::info!(count = movements.len(), %start, %end, "exported movements");
    Ok(movements.len())
}
