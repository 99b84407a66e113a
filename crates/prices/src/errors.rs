//! Validation errors for price-layer records.
//!
//! The engine itself never rejects a price; these errors belong to the
//! mutation boundary where user-entered overrides are persisted.

use thiserror::Error;

/// Errors raised when validating caller-supplied price records.
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Invalid price input: {0}")]
    InvalidInput(String),
}
