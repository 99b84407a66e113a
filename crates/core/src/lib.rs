//! Omnifolio Core - the portfolio valuation and exposure engine.
//!
//! This crate contains the pure calculation core: symbol classification,
//! position valuation, exposure/risk aggregation and the breakdown views.
//! It performs no I/O; the API layer fetches prices and positions and hands
//! them in as plain data.

pub mod accounts;
pub mod classification;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod positions;
pub mod utils;

// Re-export common types from the position and portfolio modules
pub use portfolio::*;
pub use positions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
