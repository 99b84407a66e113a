//! Accounts module - connection metadata used for custody attribution.

mod accounts_model;

// Re-export the public interface
pub use accounts_model::{Account, DataSource};
