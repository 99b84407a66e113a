//! Valued position models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classification::{MainCategory, SubCategory};
use crate::positions::AssetClass;

/// A position enriched with resolved classification and pricing.
///
/// Created fresh on every calculation pass and never persisted. All optional
/// input fields are resolved here so downstream aggregation works with plain
/// values: `asset_class` reflects the override/class/type precedence and the
/// categories come from the symbol tables.
///
/// `value`, `change24h` and `change_percent24h` are signed; debt positions
/// carry negative values and inverted change (an appreciating borrowed asset
/// harms the holder).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetWithPrice {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub main_category: MainCategory,
    pub sub_category: SubCategory,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_basis: Option<Decimal>,
    pub is_debt: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Resolved price per unit, before the debt sign flip.
    pub current_price: Decimal,
    /// Signed position value: `amount × price`, negated for debt.
    pub value: Decimal,
    /// Signed 24h value delta for the whole position.
    pub change24h: Decimal,
    /// Signed 24h percent change of the underlying price.
    pub change_percent24h: Decimal,
    /// Share of the positive, non-perp-notional portfolio value, in percent.
    pub allocation: Decimal,
    /// Total acquisition cost: `amount × cost_basis`. Filled together with
    /// the gain fields, so it is absent for debt, perp notional and unpriced
    /// positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_basis_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrealized_gain: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrealized_gain_percent: Option<Decimal>,
    pub has_custom_price: bool,
    /// Leveraged trade face value rather than an owned asset. Excluded from
    /// net worth, allocation, concentration and custody totals.
    pub is_perp_notional: bool,
}

impl AssetWithPrice {
    /// Absolute exposure contributed by this position.
    pub fn abs_value(&self) -> Decimal {
        self.value.abs()
    }
}
