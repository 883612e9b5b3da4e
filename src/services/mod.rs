//! Service layer for bankbook
//!
//! Business rules on top of the storage layer: every balance change goes
//! through [`BalanceEngine`].

pub mod engine;

pub use engine::{BalanceEngine, TransferResult};
