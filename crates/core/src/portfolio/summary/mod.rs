//! Portfolio summary: headline totals and the engine's composition root.

mod summary_model;
mod summary_service;

pub use summary_model::{LargestPosition, PortfolioSummary};
pub use summary_service::PortfolioCalculator;
