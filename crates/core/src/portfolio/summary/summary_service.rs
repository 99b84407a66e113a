//! Portfolio summary builder and the engine's composition root.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use omnifolio_prices::{CustomPriceMap, FxRateMap, PriceLookupProvider, PriceMap};

use crate::accounts::Account;
use crate::classification::CategoryService;
use crate::fx::FxService;
use crate::portfolio::composition::{
    AllocationBreakdownItem, CashBreakdownResult, CompositionAnalyzer, CryptoMetrics,
    EquitiesBreakdownResult, RiskProfileItem,
};
use crate::portfolio::custody::{ChainBreakdownItem, CustodyAnalyzer, CustodyBreakdownItem};
use crate::portfolio::exposure::{ExposureAggregator, ExposureData};
use crate::portfolio::valuation::{AssetWithPrice, PositionValuator};
use crate::positions::Position;
use crate::utils::percentage_of;

use super::summary_model::{LargestPosition, PortfolioSummary};

/// Composition root wiring the valuator and every aggregation view.
///
/// The calculator holds no mutable state; it is `Send + Sync` and is meant
/// to be built once and shared behind an `Arc`. The `summary` and
/// `exposure` entry points value the positions themselves; the breakdown
/// methods take an already-valued list so a single valuation pass can feed
/// every view.
pub struct PortfolioCalculator {
    valuator: PositionValuator,
    exposure: ExposureAggregator,
    custody: CustodyAnalyzer,
    composition: CompositionAnalyzer,
}

impl PortfolioCalculator {
    pub fn new(price_provider: Arc<dyn PriceLookupProvider>) -> Self {
        let category_service = CategoryService::new();
        Self {
            valuator: PositionValuator::new(category_service, FxService::new(), price_provider),
            exposure: ExposureAggregator::new(category_service),
            custody: CustodyAnalyzer::new(category_service),
            composition: CompositionAnalyzer::new(category_service),
        }
    }

    /// Overrides the leverage assumed by the margin-used estimate.
    pub fn with_assumed_leverage(mut self, assumed_leverage: Decimal) -> Self {
        self.exposure = self.exposure.with_assumed_leverage(assumed_leverage);
        self
    }

    /// Values the position set without aggregating.
    pub fn value_positions(
        &self,
        positions: &[Position],
        prices: &PriceMap,
        custom_prices: Option<&CustomPriceMap>,
        fx_rates: Option<&FxRateMap>,
    ) -> Vec<AssetWithPrice> {
        self.valuator
            .value_positions(positions, prices, custom_prices, fx_rates)
    }

    /// Headline totals plus the valued asset list.
    pub fn summary(
        &self,
        positions: &[Position],
        prices: &PriceMap,
        custom_prices: Option<&CustomPriceMap>,
        fx_rates: Option<&FxRateMap>,
    ) -> PortfolioSummary {
        debug!("Building portfolio summary for {} positions", positions.len());
        let assets = self
            .valuator
            .value_positions(positions, prices, custom_prices, fx_rates);
        build_summary(assets)
    }

    /// Exposure, concentration and category metrics for the position set.
    pub fn exposure(
        &self,
        positions: &[Position],
        prices: &PriceMap,
        custom_prices: Option<&CustomPriceMap>,
        fx_rates: Option<&FxRateMap>,
    ) -> ExposureData {
        let assets = self
            .valuator
            .value_positions(positions, prices, custom_prices, fx_rates);
        self.exposure.aggregate(&assets)
    }

    pub fn custody_breakdown(
        &self,
        assets: &[AssetWithPrice],
        accounts: &[Account],
    ) -> Vec<CustodyBreakdownItem> {
        self.custody.custody_breakdown(assets, accounts)
    }

    pub fn chain_breakdown(
        &self,
        assets: &[AssetWithPrice],
        accounts: &[Account],
    ) -> Vec<ChainBreakdownItem> {
        self.custody.chain_breakdown(assets, accounts)
    }

    pub fn crypto_metrics(&self, assets: &[AssetWithPrice]) -> CryptoMetrics {
        self.composition.crypto_metrics(assets)
    }

    pub fn allocation_breakdown(&self, assets: &[AssetWithPrice]) -> Vec<AllocationBreakdownItem> {
        self.composition.allocation_breakdown(assets)
    }

    pub fn risk_profile(&self, assets: &[AssetWithPrice]) -> Vec<RiskProfileItem> {
        self.composition.risk_profile(assets)
    }

    pub fn cash_breakdown(&self, assets: &[AssetWithPrice]) -> CashBreakdownResult {
        self.composition.cash_breakdown(assets)
    }

    pub fn equities_breakdown(&self, assets: &[AssetWithPrice]) -> EquitiesBreakdownResult {
        self.composition.equities_breakdown(assets)
    }
}

/// Folds the valued list into the headline totals.
///
/// Totals route by value sign while the counts use the debt flag; a debt
/// whose price resolves to zero still counts as a debt even though it no
/// longer moves the totals.
fn build_summary(assets: Vec<AssetWithPrice>) -> PortfolioSummary {
    let mut gross_assets = Decimal::ZERO;
    let mut total_debts = Decimal::ZERO;
    let mut change24h = Decimal::ZERO;
    let mut total_cost_basis = Decimal::ZERO;
    let mut total_unrealized_gain = Decimal::ZERO;
    let mut asset_count = 0usize;
    let mut debt_count = 0usize;

    for asset in &assets {
        if asset.is_perp_notional {
            continue;
        }
        asset_count += 1;
        if asset.is_debt {
            debt_count += 1;
        }
        if asset.value < Decimal::ZERO {
            total_debts += asset.value.abs();
        } else {
            gross_assets += asset.value;
        }
        change24h += asset.change24h;
        if let (Some(cost), Some(gain)) = (asset.cost_basis_value, asset.unrealized_gain) {
            total_cost_basis += cost;
            total_unrealized_gain += gain;
        }
    }

    let total_value = gross_assets - total_debts;

    let largest_position = assets
        .iter()
        .filter(|asset| {
            !asset.is_perp_notional && !asset.is_debt && asset.value > Decimal::ZERO
        })
        .max_by(|a, b| a.value.cmp(&b.value))
        .map(|asset| LargestPosition {
            symbol: asset.symbol.clone(),
            value: asset.value,
            allocation: asset.allocation,
        });

    PortfolioSummary {
        total_value,
        gross_assets,
        total_debts,
        change24h,
        change_percent24h: percentage_of(change24h, total_value - change24h),
        total_cost_basis,
        total_unrealized_gain,
        total_unrealized_gain_percent: percentage_of(total_unrealized_gain, total_cost_basis),
        asset_count,
        debt_count,
        largest_position,
        assets,
    }
}
