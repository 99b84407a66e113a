//! Exposure and risk data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classification::PerpSide;

/// How a valued position contributes to market exposure.
///
/// Exactly one class applies per position; the classifier's rule order
/// decides which. `BorrowedCash` is leverage rather than short exposure:
/// borrowing a dollar-pegged asset is not a directional bet against the
/// dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureClass {
    PerpLong,
    PerpShort,
    PerpMargin,
    SpotLong,
    SpotShort,
    Cash,
    PerpSpot,
    BorrowedCash,
}

impl ExposureClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExposureClass::PerpLong => "perp-long",
            ExposureClass::PerpShort => "perp-short",
            ExposureClass::PerpMargin => "perp-margin",
            ExposureClass::SpotLong => "spot-long",
            ExposureClass::SpotShort => "spot-short",
            ExposureClass::Cash => "cash",
            ExposureClass::PerpSpot => "perp-spot",
            ExposureClass::BorrowedCash => "borrowed-cash",
        }
    }
}

/// One node of the category breakdown tree.
///
/// Main-category nodes carry their sub-categories as children; child nodes
/// have an empty `children`. Money fields stay unrounded; `percentage` is
/// the gross share of total gross assets, rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Bucket key, `"crypto"` for a main node or `"crypto:btc"` for a child.
    pub key: String,
    pub name: String,
    pub gross_value: Decimal,
    pub debt_value: Decimal,
    pub net_value: Decimal,
    pub percentage: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

/// A single open perp trade, listed in the derivatives table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpTrade {
    pub symbol: String,
    pub name: String,
    pub side: PerpSide,
    /// Leveraged face value of the trade, always positive.
    pub notional: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Perp positions rolled up: notionals, collateral and the margin estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpsBreakdown {
    pub longs_notional: Decimal,
    pub shorts_notional: Decimal,
    pub gross_notional: Decimal,
    /// Cash-equivalent collateral held on perp venues.
    pub margin: Decimal,
    /// `gross_notional / assumed average leverage`; an estimate, not
    /// exchange margin data.
    pub estimated_margin_used: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trades: Vec<PerpTrade>,
}

/// Net-worth and leverage figures over the whole portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureMetrics {
    pub gross_assets: Decimal,
    pub total_debts: Decimal,
    pub net_worth: Decimal,
    pub long_exposure: Decimal,
    pub short_exposure: Decimal,
    pub gross_exposure: Decimal,
    pub net_exposure: Decimal,
    /// `gross_exposure / net_worth`, 0 when net worth is not positive.
    pub leverage: Decimal,
    pub cash_percentage: Decimal,
    pub debt_ratio: Decimal,
}

/// Position concentration over positive, non-notional values by symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationMetrics {
    /// Herfindahl-Hirschman Index on the 0-10000 scale.
    pub hhi: Decimal,
    pub top1_percentage: Decimal,
    pub top5_percentage: Decimal,
    pub top10_percentage: Decimal,
    pub position_count: usize,
}

/// Spot versus derivatives share of gross exposure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotVsDerivatives {
    pub spot_value: Decimal,
    pub spot_percentage: Decimal,
    pub derivatives_value: Decimal,
    pub derivatives_percentage: Decimal,
}

/// Everything the exposure view consumes, built in one aggregation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureData {
    pub categories: Vec<CategoryNode>,
    pub perps: PerpsBreakdown,
    pub exposure: ExposureMetrics,
    pub concentration: ConcentrationMetrics,
    pub spot_vs_derivatives: SpotVsDerivatives,
}
