//! Omnifolio Prices Crate
//!
//! This crate owns the price-layer data model and the symbol-resolution
//! catalog that the portfolio engine consumes.
//!
//! # Overview
//!
//! The engine in `omnifolio-core` is pure: it never fetches anything. The
//! caller (API layer) fetches market prices, FX rates, and user overrides up
//! front and hands them to the engine as plain maps. This crate defines:
//!
//! - [`PriceData`] - latest price plus 24h change for one lookup key
//! - [`CustomPrice`] - a user-entered price override with its timestamp
//! - [`PriceMap`] / [`CustomPriceMap`] / [`FxRateMap`] - the map shapes the
//!   engine accepts
//! - [`PriceLookupProvider`] - the pure symbol -> provider-id translation
//!   seam the valuator calls when a position has no precomputed price key
//! - [`CoinGeckoCatalog`] - the bundled, table-driven implementation of
//!   [`PriceLookupProvider`]
//! - [`PriceError`] - validation errors for the mutation boundary
//!
//! Nothing in this crate performs network I/O.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::PriceError;
pub use models::{CustomPrice, CustomPriceMap, FxRateMap, PriceData, PriceMap};
pub use provider::{CoinGeckoCatalog, PriceLookupProvider};
