//! Portfolio summary domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::valuation::AssetWithPrice;

/// The largest single holding, surfaced on the concentration card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargestPosition {
    /// Symbol of the holding.
    pub symbol: String,
    /// Signed value in base currency.
    pub value: Decimal,
    /// Share of net worth, rounded for display.
    pub allocation: Decimal,
}

/// Headline totals plus the valued position list.
///
/// Perp-notional rows are excluded from every total here; they belong to
/// the exposure metrics, not to what the portfolio actually holds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Net worth: gross assets minus debts.
    pub total_value: Decimal,
    /// Sum of positive position values.
    pub gross_assets: Decimal,
    /// Sum of debt magnitudes.
    pub total_debts: Decimal,
    /// Signed 24h move summed over the positions.
    pub change24h: Decimal,
    /// 24h move relative to yesterday's net worth.
    pub change_percent24h: Decimal,
    /// Total cost basis over non-debt positions that carry one.
    pub total_cost_basis: Decimal,
    /// Unrealized gain over the same positions.
    pub total_unrealized_gain: Decimal,
    /// Unrealized gain relative to cost basis.
    pub total_unrealized_gain_percent: Decimal,
    /// Number of holdings, debts included.
    pub asset_count: usize,
    /// Number of debt positions.
    pub debt_count: usize,
    /// Largest holding by absolute value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_position: Option<LargestPosition>,
    /// Every valued position, perp-notional rows included.
    pub assets: Vec<AssetWithPrice>,
}
