//! Custody and chain breakdowns.
//!
//! Both breakdowns bucket net signed values, then keep only buckets that
//! net out positive. Perp notional is skipped: a trade's face value is not
//! held anywhere.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::accounts::{Account, DataSource};
use crate::classification::{CategoryService, MainCategory};
use crate::portfolio::valuation::AssetWithPrice;
use crate::utils::percentage_of;

use super::custody_model::{ChainBreakdownItem, CustodyBreakdownItem, CustodyKind};

/// Buckets valued positions by where they are held.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustodyAnalyzer {
    category_service: CategoryService,
}

impl CustodyAnalyzer {
    pub fn new(category_service: CategoryService) -> Self {
        Self { category_service }
    }

    /// Net value per custody bucket, positive buckets only, largest first.
    pub fn custody_breakdown(
        &self,
        assets: &[AssetWithPrice],
        accounts: &[Account],
    ) -> Vec<CustodyBreakdownItem> {
        let accounts_by_id = index_accounts(accounts);

        let mut buckets: HashMap<CustodyKind, Decimal> = HashMap::new();
        for asset in assets {
            if asset.is_perp_notional {
                continue;
            }
            let kind = self.custody_of(asset, &accounts_by_id);
            *buckets.entry(kind).or_insert(Decimal::ZERO) += asset.value;
        }

        let mut items: Vec<(CustodyKind, Decimal)> = buckets
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));

        let total: Decimal = items.iter().map(|(_, value)| *value).sum();
        items
            .into_iter()
            .map(|(custody, value)| CustodyBreakdownItem {
                custody,
                name: custody.display_name().to_string(),
                value,
                percentage: percentage_of(value, total),
            })
            .collect()
    }

    /// Net value per chain, positive buckets only, largest first.
    ///
    /// Positions without a chain tag fall back to their exchange's label
    /// (a CEX balance has no meaningful chain), then to "Other".
    pub fn chain_breakdown(
        &self,
        assets: &[AssetWithPrice],
        accounts: &[Account],
    ) -> Vec<ChainBreakdownItem> {
        let accounts_by_id = index_accounts(accounts);

        let mut buckets: HashMap<String, Decimal> = HashMap::new();
        for asset in assets {
            if asset.is_perp_notional {
                continue;
            }
            let label = asset
                .chain
                .clone()
                .or_else(|| exchange_label(asset, &accounts_by_id))
                .unwrap_or_else(|| "Other".to_string());
            *buckets.entry(label).or_insert(Decimal::ZERO) += asset.value;
        }

        let mut items: Vec<(String, Decimal)> = buckets
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));

        let total: Decimal = items.iter().map(|(_, value)| *value).sum();
        items
            .into_iter()
            .map(|(chain, value)| ChainBreakdownItem {
                chain,
                value,
                percentage: percentage_of(value, total),
            })
            .collect()
    }

    fn custody_of(
        &self,
        asset: &AssetWithPrice,
        accounts_by_id: &HashMap<&str, &Account>,
    ) -> CustodyKind {
        if let Some(protocol) = asset.protocol.as_deref() {
            if self.category_service.is_perp_protocol(protocol) {
                return CustodyKind::PerpDex;
            }
            return CustodyKind::Defi;
        }

        let source = asset
            .account_id
            .as_deref()
            .and_then(|id| accounts_by_id.get(id))
            .map(|account| account.source)
            .unwrap_or(DataSource::Manual);

        if source.is_wallet() {
            return CustodyKind::SelfCustody;
        }
        if source.is_exchange() {
            return CustodyKind::Cex;
        }

        // Manually tracked positions: traditional assets sit at a bank or
        // broker, anything else has no inferable venue.
        match asset.main_category {
            MainCategory::Equities | MainCategory::Cash => CustodyKind::BanksBrokers,
            _ => CustodyKind::Manual,
        }
    }
}

fn index_accounts<'a>(accounts: &'a [Account]) -> HashMap<&'a str, &'a Account> {
    accounts
        .iter()
        .map(|account| (account.id.as_str(), account))
        .collect()
}

fn exchange_label(
    asset: &AssetWithPrice,
    accounts_by_id: &HashMap<&str, &Account>,
) -> Option<String> {
    let account = asset
        .account_id
        .as_deref()
        .and_then(|id| accounts_by_id.get(id))?;
    if account.source.is_exchange() {
        Some(account.source.display_name().to_string())
    } else {
        None
    }
}
