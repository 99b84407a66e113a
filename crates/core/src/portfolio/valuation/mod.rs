//! Position valuation: prices, signed values and allocation shares.

mod valuation_model;
mod valuation_service;

pub use valuation_model::AssetWithPrice;
pub use valuation_service::PositionValuator;
