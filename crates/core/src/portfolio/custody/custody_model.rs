//! Custody and chain breakdown models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a position is held, inferred from protocol tags and account
/// connection sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustodyKind {
    SelfCustody,
    Defi,
    PerpDex,
    Cex,
    BanksBrokers,
    Manual,
}

impl CustodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustodyKind::SelfCustody => "self-custody",
            CustodyKind::Defi => "defi",
            CustodyKind::PerpDex => "perp-dex",
            CustodyKind::Cex => "cex",
            CustodyKind::BanksBrokers => "banks-brokers",
            CustodyKind::Manual => "manual",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustodyKind::SelfCustody => "Self-custody",
            CustodyKind::Defi => "DeFi",
            CustodyKind::PerpDex => "Perp DEX",
            CustodyKind::Cex => "Exchanges",
            CustodyKind::BanksBrokers => "Banks & Brokers",
            CustodyKind::Manual => "Manual",
        }
    }
}

/// One custody bucket with its net value. Only positive buckets are shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyBreakdownItem {
    pub custody: CustodyKind,
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// One chain (or exchange) bucket with its net value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainBreakdownItem {
    pub chain: String,
    pub value: Decimal,
    pub percentage: Decimal,
}
