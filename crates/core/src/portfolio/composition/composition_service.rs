//! Composition analytics: dominance, allocation, risk profile and the
//! cash and equities drill-downs.
//!
//! All figures use net signed values. Buckets and rows that net out to
//! zero or below are dropped from the displayed lists; the drill-down
//! totals clamp to zero while the signed sums stay internal.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::classification::{CategoryService, MainCategory, SubCategory};
use crate::constants::BASE_CURRENCY;
use crate::fx::extract_currency_code;
use crate::portfolio::valuation::AssetWithPrice;
use crate::utils::{clamp_display, percentage_of};

use super::composition_model::{
    AllocationBreakdownItem, AllocationBucket, CashBreakdownResult, CryptoMetrics,
    EquitiesBreakdownResult, EquityPositionItem, FiatCashItem, RiskProfile, RiskProfileItem,
    StablecoinCashItem,
};

/// Computes the composition views over the valued position set.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositionAnalyzer {
    category_service: CategoryService,
}

impl CompositionAnalyzer {
    pub fn new(category_service: CategoryService) -> Self {
        Self { category_service }
    }

    /// Dominance percentages over the net crypto sleeve.
    pub fn crypto_metrics(&self, assets: &[AssetWithPrice]) -> CryptoMetrics {
        let mut net_value = Decimal::ZERO;
        let mut btc = Decimal::ZERO;
        let mut eth = Decimal::ZERO;
        let mut stablecoins = Decimal::ZERO;
        let mut defi = Decimal::ZERO;

        for asset in assets {
            if asset.is_perp_notional || asset.main_category != MainCategory::Crypto {
                continue;
            }
            net_value += asset.value;
            match asset.sub_category {
                SubCategory::Btc => btc += asset.value,
                SubCategory::Eth => eth += asset.value,
                SubCategory::Stablecoins => stablecoins += asset.value,
                _ => {}
            }
            if asset
                .protocol
                .as_deref()
                .is_some_and(|protocol| !self.category_service.is_perp_protocol(protocol))
            {
                defi += asset.value;
            }
        }

        CryptoMetrics {
            net_value,
            btc_percentage: percentage_of(btc, net_value),
            eth_percentage: percentage_of(eth, net_value),
            stablecoin_percentage: percentage_of(stablecoins, net_value),
            defi_percentage: percentage_of(defi, net_value),
        }
    }

    /// Net allocation across the coarse buckets, positive buckets only.
    pub fn allocation_breakdown(&self, assets: &[AssetWithPrice]) -> Vec<AllocationBreakdownItem> {
        let mut buckets: HashMap<AllocationBucket, Decimal> = HashMap::new();
        for asset in assets {
            if asset.is_perp_notional {
                continue;
            }
            *buckets
                .entry(self.allocation_bucket(asset))
                .or_insert(Decimal::ZERO) += asset.value;
        }

        let mut kept: Vec<(AllocationBucket, Decimal)> = buckets
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        kept.sort_by(|a, b| b.1.cmp(&a.1));

        let total: Decimal = kept.iter().map(|(_, value)| *value).sum();
        kept.into_iter()
            .map(|(bucket, value)| AllocationBreakdownItem {
                bucket,
                name: bucket.display_name().to_string(),
                value,
                percentage: percentage_of(value, total),
            })
            .collect()
    }

    /// Net value per risk tier, positive tiers only.
    pub fn risk_profile(&self, assets: &[AssetWithPrice]) -> Vec<RiskProfileItem> {
        let mut tiers: HashMap<RiskProfile, Decimal> = HashMap::new();
        for asset in assets {
            if asset.is_perp_notional {
                continue;
            }
            *tiers
                .entry(self.risk_profile_of(asset))
                .or_insert(Decimal::ZERO) += asset.value;
        }

        let mut kept: Vec<(RiskProfile, Decimal)> = tiers
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        kept.sort_by(|a, b| b.1.cmp(&a.1));

        let total: Decimal = kept.iter().map(|(_, value)| *value).sum();
        kept.into_iter()
            .map(|(profile, value)| RiskProfileItem {
                profile,
                name: profile.display_name().to_string(),
                value,
                percentage: percentage_of(value, total),
            })
            .collect()
    }

    /// Fiat and stablecoin cash split with per-currency/per-symbol rows.
    pub fn cash_breakdown(&self, assets: &[AssetWithPrice]) -> CashBreakdownResult {
        let mut fiat_by_currency: HashMap<String, Decimal> = HashMap::new();
        let mut stable_by_symbol: HashMap<String, Decimal> = HashMap::new();
        let mut fiat_signed = Decimal::ZERO;
        let mut stable_signed = Decimal::ZERO;

        for asset in assets {
            if asset.is_perp_notional {
                continue;
            }
            if asset.main_category == MainCategory::Cash {
                let currency = extract_currency_code(&asset.symbol)
                    .unwrap_or_else(|| BASE_CURRENCY.to_string());
                *fiat_by_currency.entry(currency).or_insert(Decimal::ZERO) += asset.value;
                fiat_signed += asset.value;
            } else if asset.sub_category == SubCategory::Stablecoins {
                *stable_by_symbol
                    .entry(asset.symbol.to_uppercase())
                    .or_insert(Decimal::ZERO) += asset.value;
                stable_signed += asset.value;
            }
        }

        let mut fiat_rows: Vec<(String, Decimal)> = fiat_by_currency
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        fiat_rows.sort_by(|a, b| b.1.cmp(&a.1));

        let mut stable_rows: Vec<(String, Decimal)> = stable_by_symbol
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        stable_rows.sort_by(|a, b| b.1.cmp(&a.1));

        let shown_total: Decimal = fiat_rows
            .iter()
            .chain(stable_rows.iter())
            .map(|(_, value)| *value)
            .sum();

        CashBreakdownResult {
            total: clamp_display(fiat_signed + stable_signed),
            fiat_total: clamp_display(fiat_signed),
            stablecoin_total: clamp_display(stable_signed),
            fiat: fiat_rows
                .into_iter()
                .map(|(currency, value)| FiatCashItem {
                    currency,
                    value,
                    percentage: percentage_of(value, shown_total),
                })
                .collect(),
            stablecoins: stable_rows
                .into_iter()
                .map(|(symbol, value)| StablecoinCashItem {
                    underlying_currency: self
                        .category_service
                        .underlying_fiat_currency(&symbol)
                        .map(str::to_string),
                    symbol,
                    value,
                    percentage: percentage_of(value, shown_total),
                })
                .collect(),
        }
    }

    /// Stocks and ETF split with per-symbol rows.
    pub fn equities_breakdown(&self, assets: &[AssetWithPrice]) -> EquitiesBreakdownResult {
        let mut stocks_by_symbol: HashMap<String, Decimal> = HashMap::new();
        let mut etfs_by_symbol: HashMap<String, Decimal> = HashMap::new();
        let mut stocks_signed = Decimal::ZERO;
        let mut etfs_signed = Decimal::ZERO;

        for asset in assets {
            if asset.is_perp_notional || asset.main_category != MainCategory::Equities {
                continue;
            }
            let symbol = asset.symbol.to_uppercase();
            if asset.sub_category == SubCategory::Etfs {
                *etfs_by_symbol.entry(symbol).or_insert(Decimal::ZERO) += asset.value;
                etfs_signed += asset.value;
            } else {
                *stocks_by_symbol.entry(symbol).or_insert(Decimal::ZERO) += asset.value;
                stocks_signed += asset.value;
            }
        }

        let mut stock_rows: Vec<(String, Decimal)> = stocks_by_symbol
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        stock_rows.sort_by(|a, b| b.1.cmp(&a.1));

        let mut etf_rows: Vec<(String, Decimal)> = etfs_by_symbol
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        etf_rows.sort_by(|a, b| b.1.cmp(&a.1));

        let shown_total: Decimal = stock_rows
            .iter()
            .chain(etf_rows.iter())
            .map(|(_, value)| *value)
            .sum();

        let to_items = |rows: Vec<(String, Decimal)>| -> Vec<EquityPositionItem> {
            rows.into_iter()
                .map(|(symbol, value)| EquityPositionItem {
                    symbol,
                    value,
                    percentage: percentage_of(value, shown_total),
                })
                .collect()
        };

        EquitiesBreakdownResult {
            total: clamp_display(stocks_signed + etfs_signed),
            stocks_total: clamp_display(stocks_signed),
            etfs_total: clamp_display(etfs_signed),
            stocks: to_items(stock_rows),
            etfs: to_items(etf_rows),
        }
    }

    fn allocation_bucket(&self, asset: &AssetWithPrice) -> AllocationBucket {
        if asset.main_category == MainCategory::Cash
            || self.category_service.is_cash_equivalent(&asset.symbol)
        {
            return AllocationBucket::CashEquivalents;
        }
        match asset.main_category {
            MainCategory::Crypto => AllocationBucket::Crypto,
            MainCategory::Equities => AllocationBucket::Equities,
            _ => AllocationBucket::Other,
        }
    }

    fn risk_profile_of(&self, asset: &AssetWithPrice) -> RiskProfile {
        if asset.main_category == MainCategory::Cash
            || self.category_service.is_cash_equivalent(&asset.symbol)
        {
            return RiskProfile::Conservative;
        }
        if asset.main_category == MainCategory::Equities {
            return RiskProfile::Moderate;
        }
        if asset.main_category == MainCategory::Crypto
            && matches!(asset.sub_category, SubCategory::Btc | SubCategory::Eth)
        {
            return RiskProfile::Moderate;
        }
        RiskProfile::Aggressive
    }
}
