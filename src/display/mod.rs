//! Display formatting for terminal output
//!
//! Tables and registers for accounts and movements.

pub mod account;
pub mod movement;
pub mod report;

pub use account::{format_account_details, format_account_list};
pub use movement::{format_movement_register, format_movement_row};
