//! Position domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Effective asset class of a position once precedence rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Crypto,
    Equity,
    Cash,
    #[default]
    Other,
}

/// Instrument type recorded on a position before the class field existed.
///
/// Still carried because it is the only place the stock/ETF distinction
/// lives for equities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Crypto,
    Stock,
    Etf,
    Cash,
}

impl AssetType {
    /// Maps the instrument type onto the coarser asset class.
    pub fn as_class(&self) -> AssetClass {
        match self {
            AssetType::Crypto => AssetClass::Crypto,
            AssetType::Stock | AssetType::Etf => AssetClass::Equity,
            AssetType::Cash => AssetClass::Cash,
        }
    }
}

/// A raw holding supplied by the caller. Immutable during a calculation.
///
/// `amount` is always non-negative; direction is carried exclusively by
/// `is_debt`. The valuation stage flips the sign of debt values itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Admin override; wins over every other class source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_override: Option<AssetClass>,
    /// Class chosen when the position was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<AssetClass>,
    /// Legacy instrument type; also distinguishes stocks from ETFs.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    pub amount: Decimal,
    /// Average acquisition price per unit, in the reporting currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_basis: Option<Decimal>,
    #[serde(default)]
    pub is_debt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Protocol the position sits on (e.g. "Hyperliquid", "Aave v3").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Chain tag for wallet-sourced positions (e.g. "eth", "sol").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Precomputed price-map key for wallet-sourced positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_key: Option<String>,
}

impl Position {
    /// Resolves the effective asset class.
    ///
    /// Precedence: admin override, then the explicit class, then the legacy
    /// instrument type. Positions carrying none of the three resolve to
    /// `Other` and rely on symbol classification downstream.
    pub fn effective_class(&self) -> AssetClass {
        if let Some(class) = self.class_override {
            return class;
        }
        if let Some(class) = self.asset_class {
            return class;
        }
        self.asset_type.map(|t| t.as_class()).unwrap_or_default()
    }

    /// Validates position data at the mutation boundary.
    ///
    /// The calculation pipeline never rejects a position; callers persisting
    /// or mutating positions are expected to validate first.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Position amount cannot be negative; set isDebt for liabilities".to_string(),
            )));
        }
        if let Some(cost_basis) = self.cost_basis {
            if cost_basis < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Cost basis cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}
