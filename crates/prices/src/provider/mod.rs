//! Price-provider lookup seam.
//!
//! The valuator needs two pure translations when a position arrives without
//! a precomputed price key: symbol -> provider coin id, and symbol ->
//! alternate map key. Implementations must be table-driven and synchronous;
//! anything that talks to the network belongs in the fetch layer, not here.

mod coingecko;

pub use coingecko::CoinGeckoCatalog;

/// Pure symbol-translation interface consumed by the valuation engine.
pub trait PriceLookupProvider: Send + Sync {
    /// Provider-native id for a symbol (e.g. `"btc"` -> `"bitcoin"`), when
    /// the catalog knows one.
    fn coin_id(&self, symbol: &str) -> Option<String>;

    /// Secondary lookup key tried when the primary key misses: price maps
    /// populated from wallet scans are keyed by raw token symbol rather
    /// than provider id.
    fn alternate_key(&self, symbol: &str) -> String;
}
