//! Export module for bankbook
//!
//! CSV export of movements for spreadsheets and other tooling.

pub mod csv;

pub use self::csv::export_movements_csv;
