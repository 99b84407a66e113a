//! Classification module - symbol taxonomy and perp-venue detection.

mod classification_model;
mod classification_service;
mod classification_tables;

// Re-export the public interface
pub use classification_model::{Category, MainCategory, PerpSide, SubCategory};
pub use classification_service::CategoryService;
pub use classification_tables::{
    BTC_LIKE_SYMBOLS, ETH_LIKE_SYMBOLS, KNOWN_ETF_SYMBOLS, PERP_PROTOCOLS, SOL_LIKE_SYMBOLS,
    STABLECOIN_FIAT,
};
