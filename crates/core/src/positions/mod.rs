//! Positions module - the raw holdings the engine values.

mod positions_model;

// Re-export the public interface
pub use positions_model::{AssetClass, AssetType, Position};
