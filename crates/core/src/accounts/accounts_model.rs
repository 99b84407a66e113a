//! Account domain models.

use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Data source identifiers
pub const DATA_SOURCE_DEBANK: &str = "debank";
pub const DATA_SOURCE_HELIUS: &str = "helius";
pub const DATA_SOURCE_BINANCE: &str = "binance";
pub const DATA_SOURCE_COINBASE: &str = "coinbase";
pub const DATA_SOURCE_KRAKEN: &str = "kraken";
pub const DATA_SOURCE_OKX: &str = "okx";
pub const DATA_SOURCE_MANUAL: &str = "manual";

/// Represents the connection an account's holdings are sourced through.
///
/// The source is what custody and chain breakdowns use to attribute
/// ownership: wallet indexers imply self-custody, exchange connections
/// imply CEX custody, and everything else is treated as manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// DeBank - EVM wallet indexer
    Debank,
    /// Helius - Solana wallet indexer
    Helius,
    /// Binance exchange connection
    Binance,
    /// Coinbase exchange connection
    Coinbase,
    /// Kraken exchange connection
    Kraken,
    /// OKX exchange connection
    Okx,
    /// Manual entry by user
    #[default]
    Manual,
}

impl DataSource {
    /// Returns the string identifier for this data source.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Debank => DATA_SOURCE_DEBANK,
            DataSource::Helius => DATA_SOURCE_HELIUS,
            DataSource::Binance => DATA_SOURCE_BINANCE,
            DataSource::Coinbase => DATA_SOURCE_COINBASE,
            DataSource::Kraken => DATA_SOURCE_KRAKEN,
            DataSource::Okx => DATA_SOURCE_OKX,
            DataSource::Manual => DATA_SOURCE_MANUAL,
        }
    }

    /// Human-readable label used by breakdown items.
    pub fn display_name(&self) -> &'static str {
        match self {
            DataSource::Debank => "DeBank",
            DataSource::Helius => "Helius",
            DataSource::Binance => "Binance",
            DataSource::Coinbase => "Coinbase",
            DataSource::Kraken => "Kraken",
            DataSource::Okx => "OKX",
            DataSource::Manual => "Manual",
        }
    }

    /// True for on-chain wallet indexers (holdings live in self-custody).
    pub fn is_wallet(&self) -> bool {
        matches!(self, DataSource::Debank | DataSource::Helius)
    }

    /// True for centralized exchange connections.
    pub fn is_exchange(&self) -> bool {
        matches!(
            self,
            DataSource::Binance | DataSource::Coinbase | DataSource::Kraken | DataSource::Okx
        )
    }
}

impl From<DataSource> for String {
    fn from(source: DataSource) -> Self {
        source.as_str().to_string()
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            DATA_SOURCE_DEBANK => DataSource::Debank,
            DATA_SOURCE_HELIUS => DataSource::Helius,
            DATA_SOURCE_BINANCE => DataSource::Binance,
            DATA_SOURCE_COINBASE => DataSource::Coinbase,
            DATA_SOURCE_KRAKEN => DataSource::Kraken,
            DATA_SOURCE_OKX => DataSource::Okx,
            _ => DataSource::Manual,
        }
    }
}

/// Domain model representing an account positions can reference.
///
/// Accounts are optional input: when a position carries no account id, or
/// the id resolves to nothing, breakdowns fall back to manual attribution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub source: DataSource,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, source: DataSource) -> Self {
        Account {
            id: id.into(),
            name: name.into(),
            source,
        }
    }

    /// Validates account data supplied by the caller.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
