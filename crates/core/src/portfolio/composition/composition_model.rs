//! Portfolio composition models: dominance, allocation, risk and the cash
//! and equities drill-downs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dominance figures over the net crypto sleeve, perp notional excluded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoMetrics {
    /// Net signed crypto value the percentages are measured against.
    pub net_value: Decimal,
    pub btc_percentage: Decimal,
    pub eth_percentage: Decimal,
    pub stablecoin_percentage: Decimal,
    /// Share held through DeFi protocols (perp venues excluded).
    pub defi_percentage: Decimal,
}

/// Coarse asset-allocation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationBucket {
    CashEquivalents,
    Crypto,
    Equities,
    Other,
}

impl AllocationBucket {
    pub fn display_name(&self) -> &'static str {
        match self {
            AllocationBucket::CashEquivalents => "Cash & Equivalents",
            AllocationBucket::Crypto => "Crypto",
            AllocationBucket::Equities => "Equities",
            AllocationBucket::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdownItem {
    pub bucket: AllocationBucket,
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Risk tier for the profile chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfileItem {
    pub profile: RiskProfile,
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// One fiat currency row of the cash drill-down.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiatCashItem {
    pub currency: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// One stablecoin row of the cash drill-down.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StablecoinCashItem {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_currency: Option<String>,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Cash split into fiat balances and stablecoins.
///
/// Totals are clamped to zero for display; rows that net out negative are
/// dropped rather than shown as negative cash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBreakdownResult {
    pub total: Decimal,
    pub fiat_total: Decimal,
    pub stablecoin_total: Decimal,
    pub fiat: Vec<FiatCashItem>,
    pub stablecoins: Vec<StablecoinCashItem>,
}

/// One equity row of the stocks/ETFs drill-down.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPositionItem {
    pub symbol: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Equities split into single stocks and ETFs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquitiesBreakdownResult {
    pub total: Decimal,
    pub stocks_total: Decimal,
    pub etfs_total: Decimal,
    pub stocks: Vec<EquityPositionItem>,
    pub etfs: Vec<EquityPositionItem>,
}
