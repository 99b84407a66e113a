//! Exposure aggregation over the valued, classified position set.
//!
//! One pass routes every asset through the classifier into the exposure
//! accumulators and the category totals; the breakdown structures are then
//! built from those totals. Perp long/short notional never enters category
//! gross/debt totals or net worth. Margin does: it is real collateral.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::classification::{Category, CategoryService, MainCategory, PerpSide, SubCategory};
use crate::constants::ASSUMED_AVERAGE_LEVERAGE;
use crate::portfolio::valuation::AssetWithPrice;
use crate::utils::{guarded_ratio, percentage_of};

use super::exposure_classifier::ExposureClassifier;
use super::exposure_model::{
    CategoryNode, ConcentrationMetrics, ExposureClass, ExposureData, ExposureMetrics, PerpTrade,
    PerpsBreakdown, SpotVsDerivatives,
};

/// Rolls valued positions up into exposure, concentration and category
/// figures.
#[derive(Debug, Clone, Copy)]
pub struct ExposureAggregator {
    classifier: ExposureClassifier,
    assumed_leverage: Decimal,
}

/// Running totals of the single aggregation pass.
#[derive(Default)]
struct ExposureTotals {
    perps_margin: Decimal,
    perps_longs: Decimal,
    perps_shorts: Decimal,
    spot_long_value: Decimal,
    spot_short_value: Decimal,
    cash_equivalents: Decimal,
    category_gross: HashMap<(MainCategory, SubCategory), Decimal>,
    category_debt: HashMap<(MainCategory, SubCategory), Decimal>,
    trades: Vec<PerpTrade>,
}

impl ExposureAggregator {
    pub fn new(category_service: CategoryService) -> Self {
        Self {
            classifier: ExposureClassifier::new(category_service),
            assumed_leverage: Decimal::new(ASSUMED_AVERAGE_LEVERAGE, 0),
        }
    }

    /// Overrides the leverage factor behind the margin-used estimate.
    pub fn with_assumed_leverage(mut self, assumed_leverage: Decimal) -> Self {
        self.assumed_leverage = assumed_leverage;
        self
    }

    /// Aggregates the full asset set. Empty input yields zeroed output.
    pub fn aggregate(&self, assets: &[AssetWithPrice]) -> ExposureData {
        if assets.is_empty() {
            return ExposureData::default();
        }
        debug!("Aggregating exposure over {} assets", assets.len());

        let totals = self.accumulate(assets);

        let gross_assets: Decimal = totals.category_gross.values().copied().sum();
        let total_debts: Decimal = totals.category_debt.values().copied().sum();
        let net_worth = gross_assets - total_debts;

        let long_exposure = (totals.spot_long_value + totals.perps_longs).max(Decimal::ZERO);
        let short_exposure = (totals.spot_short_value + totals.perps_shorts).max(Decimal::ZERO);
        let gross_exposure = long_exposure + short_exposure;
        let net_exposure = long_exposure - short_exposure;
        let leverage = guarded_ratio(gross_exposure, net_worth).round_dp(2);

        let exposure = ExposureMetrics {
            gross_assets,
            total_debts,
            net_worth,
            long_exposure,
            short_exposure,
            gross_exposure,
            net_exposure,
            leverage,
            cash_percentage: percentage_of(totals.cash_equivalents, gross_assets),
            debt_ratio: percentage_of(total_debts, gross_assets),
        };

        let gross_notional = totals.perps_longs + totals.perps_shorts;
        let estimated_margin_used = guarded_ratio(gross_notional, self.assumed_leverage);
        let mut trades = totals.trades;
        trades.sort_by(|a, b| b.notional.cmp(&a.notional));
        let perps = PerpsBreakdown {
            longs_notional: totals.perps_longs,
            shorts_notional: totals.perps_shorts,
            gross_notional,
            margin: totals.perps_margin,
            estimated_margin_used,
            trades,
        };

        let spot_value = totals.spot_long_value + totals.spot_short_value;
        let spot_vs_derivatives = SpotVsDerivatives {
            spot_value,
            spot_percentage: percentage_of(spot_value, gross_exposure),
            derivatives_value: gross_notional,
            derivatives_percentage: percentage_of(gross_notional, gross_exposure),
        };

        ExposureData {
            categories: build_category_tree(
                &totals.category_gross,
                &totals.category_debt,
                gross_assets,
            ),
            perps,
            exposure,
            concentration: build_concentration(assets),
            spot_vs_derivatives,
        }
    }

    fn accumulate(&self, assets: &[AssetWithPrice]) -> ExposureTotals {
        let mut totals = ExposureTotals::default();

        for asset in assets {
            let magnitude = asset.abs_value();
            match self.classifier.classify(asset) {
                ExposureClass::PerpLong => {
                    totals.perps_longs += magnitude;
                    totals.trades.push(perp_trade(asset, PerpSide::Long, magnitude));
                    // Notional is not an owned asset; skip category totals.
                    continue;
                }
                ExposureClass::PerpShort => {
                    totals.perps_shorts += magnitude;
                    totals
                        .trades
                        .push(perp_trade(asset, PerpSide::Short, magnitude));
                    continue;
                }
                ExposureClass::PerpMargin => {
                    totals.perps_margin += magnitude;
                    totals.cash_equivalents += magnitude;
                }
                ExposureClass::PerpSpot | ExposureClass::SpotLong => {
                    totals.spot_long_value += magnitude;
                }
                ExposureClass::SpotShort => {
                    totals.spot_short_value += magnitude;
                }
                ExposureClass::Cash => {
                    totals.cash_equivalents += magnitude;
                }
                // Leverage context only; never short exposure.
                ExposureClass::BorrowedCash => {}
            }

            let key = (asset.main_category, asset.sub_category);
            if asset.value < Decimal::ZERO {
                *totals.category_debt.entry(key).or_insert(Decimal::ZERO) += magnitude;
            } else {
                *totals.category_gross.entry(key).or_insert(Decimal::ZERO) += magnitude;
            }
        }

        totals
    }
}

fn perp_trade(asset: &AssetWithPrice, side: PerpSide, notional: Decimal) -> PerpTrade {
    PerpTrade {
        symbol: asset.symbol.clone(),
        name: asset.name.clone(),
        side,
        notional,
        protocol: asset.protocol.clone(),
    }
}

/// Builds the main-category tree with sub-category children, both levels
/// sorted descending by gross value.
fn build_category_tree(
    gross: &HashMap<(MainCategory, SubCategory), Decimal>,
    debt: &HashMap<(MainCategory, SubCategory), Decimal>,
    gross_assets: Decimal,
) -> Vec<CategoryNode> {
    let mut by_main: HashMap<MainCategory, HashMap<SubCategory, (Decimal, Decimal)>> =
        HashMap::new();

    for (&(main, sub), &value) in gross {
        by_main.entry(main).or_default().entry(sub).or_default().0 += value;
    }
    for (&(main, sub), &value) in debt {
        by_main.entry(main).or_default().entry(sub).or_default().1 += value;
    }

    let mut nodes: Vec<CategoryNode> = by_main
        .into_iter()
        .map(|(main, subs)| {
            let mut children: Vec<CategoryNode> = subs
                .into_iter()
                .map(|(sub, (sub_gross, sub_debt))| CategoryNode {
                    key: Category::new(main, sub).key(),
                    name: sub.display_name().to_string(),
                    gross_value: sub_gross,
                    debt_value: sub_debt,
                    net_value: sub_gross - sub_debt,
                    percentage: percentage_of(sub_gross, gross_assets),
                    children: Vec::new(),
                })
                .collect();
            children.sort_by(|a, b| b.gross_value.cmp(&a.gross_value));

            let main_gross: Decimal = children.iter().map(|c| c.gross_value).sum();
            let main_debt: Decimal = children.iter().map(|c| c.debt_value).sum();
            CategoryNode {
                key: main.as_str().to_string(),
                name: main.display_name().to_string(),
                gross_value: main_gross,
                debt_value: main_debt,
                net_value: main_gross - main_debt,
                percentage: percentage_of(main_gross, gross_assets),
                children,
            }
        })
        .collect();
    nodes.sort_by(|a, b| b.gross_value.cmp(&a.gross_value));

    nodes
}

/// Concentration over positive, non-notional values aggregated by symbol.
///
/// Shares stay at full precision until the final display rounding so that
/// N equal positions land on 10000/N exactly.
fn build_concentration(assets: &[AssetWithPrice]) -> ConcentrationMetrics {
    let mut by_symbol: HashMap<&str, Decimal> = HashMap::new();
    for asset in assets {
        if asset.is_perp_notional || asset.value <= Decimal::ZERO {
            continue;
        }
        *by_symbol
            .entry(asset.symbol.as_str())
            .or_insert(Decimal::ZERO) += asset.value;
    }

    let total: Decimal = by_symbol.values().copied().sum();
    if total <= Decimal::ZERO {
        return ConcentrationMetrics::default();
    }

    let mut shares: Vec<Decimal> = by_symbol
        .values()
        .map(|value| value / total * dec!(100))
        .collect();
    shares.sort_by(|a, b| b.cmp(a));

    let hhi = shares
        .iter()
        .map(|share| share * share)
        .sum::<Decimal>()
        .round_dp(2);
    let top = |n: usize| shares.iter().take(n).copied().sum::<Decimal>().round_dp(2);

    ConcentrationMetrics {
        hhi,
        top1_percentage: top(1),
        top5_percentage: top(5),
        top10_percentage: top(10),
        position_count: by_symbol.len(),
    }
}
