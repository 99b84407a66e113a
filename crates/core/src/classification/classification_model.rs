//! Category taxonomy models.

use serde::{Deserialize, Serialize};

/// Top-level category bucket for breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    Crypto,
    Equities,
    Cash,
    #[default]
    Other,
}

impl MainCategory {
    /// Returns the string identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            MainCategory::Crypto => "crypto",
            MainCategory::Equities => "equities",
            MainCategory::Cash => "cash",
            MainCategory::Other => "other",
        }
    }

    /// Human-readable label used by breakdown items.
    pub fn display_name(&self) -> &'static str {
        match self {
            MainCategory::Crypto => "Crypto",
            MainCategory::Equities => "Equities",
            MainCategory::Cash => "Cash",
            MainCategory::Other => "Other",
        }
    }
}

/// Second-level category, mutually exclusive within a main category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubCategory {
    Btc,
    Eth,
    Sol,
    Stablecoins,
    Tokens,
    Stocks,
    Etfs,
    Cash,
    #[default]
    Other,
}

impl SubCategory {
    /// Returns the string identifier for this sub-category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::Btc => "btc",
            SubCategory::Eth => "eth",
            SubCategory::Sol => "sol",
            SubCategory::Stablecoins => "stablecoins",
            SubCategory::Tokens => "tokens",
            SubCategory::Stocks => "stocks",
            SubCategory::Etfs => "etfs",
            SubCategory::Cash => "cash",
            SubCategory::Other => "other",
        }
    }

    /// Human-readable label used by breakdown items.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubCategory::Btc => "BTC",
            SubCategory::Eth => "ETH",
            SubCategory::Sol => "SOL",
            SubCategory::Stablecoins => "Stablecoins",
            SubCategory::Tokens => "Tokens",
            SubCategory::Stocks => "Stocks",
            SubCategory::Etfs => "ETFs",
            SubCategory::Cash => "Cash",
            SubCategory::Other => "Other",
        }
    }
}

/// Combined main and sub category assigned to one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub main: MainCategory,
    pub sub: SubCategory,
}

impl Category {
    pub fn new(main: MainCategory, sub: SubCategory) -> Self {
        Category { main, sub }
    }

    /// Bucketing key combining both levels, e.g. "crypto:btc".
    pub fn key(&self) -> String {
        format!("{}:{}", self.main.as_str(), self.sub.as_str())
    }
}

/// Direction parsed from a perp trade name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerpSide {
    Long,
    Short,
}
