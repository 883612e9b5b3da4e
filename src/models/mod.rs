//! Core data models for bankbook
//!
//! Accounts (one per bank), the movements recorded against them, and the
//! value types they are built from.

pub mod account;
pub mod ids;
pub mod money;
pub mod movement;

pub use account::{Account, AccountStatus, Bank};
pub use ids::{AccountId, MovementId};
pub use money::{Money, MoneyParseError};
pub use movement::{Movement, MovementKind};
