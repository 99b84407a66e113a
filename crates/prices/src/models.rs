//! Price-layer data models shared between the fetch layer and the engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::PriceError;

/// Latest market data for one price-lookup key.
///
/// Keys are symbol-derived: a provider coin id (`"bitcoin"`), a wallet
/// token symbol (`"weth"`), or an equity ticker (`"aapl"`), depending on
/// which fetcher produced the entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    /// Last traded price in USD.
    pub price: Decimal,
    /// Absolute price change over the trailing 24 hours.
    pub change24h: Decimal,
    /// Percent price change over the trailing 24 hours.
    pub change_percent24h: Decimal,
}

impl PriceData {
    pub fn new(price: Decimal, change24h: Decimal, change_percent24h: Decimal) -> Self {
        Self {
            price,
            change24h,
            change_percent24h,
        }
    }

    /// A price with no 24h movement (manual quotes, freshly listed assets).
    pub fn flat(price: Decimal) -> Self {
        Self {
            price,
            change24h: Decimal::ZERO,
            change_percent24h: Decimal::ZERO,
        }
    }
}

/// A user-entered price override for one symbol.
///
/// A custom price wins over market data for its symbol. Because there is no
/// time series behind a manual number, the engine forces the 24h change of
/// such positions to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPrice {
    /// Override price in USD.
    pub price: Decimal,
    /// Free-form annotation ("OTC deal", "illiquid, est."), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the override was entered.
    pub set_at: DateTime<Utc>,
}

impl CustomPrice {
    pub fn new(price: Decimal, note: Option<String>, set_at: DateTime<Utc>) -> Self {
        Self {
            price,
            note,
            set_at,
        }
    }

    /// Validates an override at the mutation boundary.
    ///
    /// The engine applies whatever it is handed; callers persisting an
    /// override are expected to validate first.
    pub fn validate(&self) -> Result<(), PriceError> {
        if self.price < Decimal::ZERO {
            return Err(PriceError::InvalidInput(
                "Custom price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Market prices keyed by price-lookup key.
pub type PriceMap = HashMap<String, PriceData>;

/// Custom price overrides keyed by lower-cased symbol.
pub type CustomPriceMap = HashMap<String, CustomPrice>;

/// Live FX rates to USD keyed by upper-cased ISO currency code.
pub type FxRateMap = HashMap<String, Decimal>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_custom_price_rejects_negative() {
        let price = CustomPrice::new(dec!(-1), None, Utc::now());
        assert!(price.validate().is_err());
    }

    #[test]
    fn test_custom_price_accepts_zero_and_positive() {
        assert!(CustomPrice::new(dec!(0), None, Utc::now()).validate().is_ok());
        assert!(CustomPrice::new(dec!(12.5), Some("OTC deal".to_string()), Utc::now())
            .validate()
            .is_ok());
    }
}
