//! Configuration module for bankbook
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BankbookPaths;
pub use settings::Settings;
