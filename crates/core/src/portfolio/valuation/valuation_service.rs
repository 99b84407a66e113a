//! Position valuation.
//!
//! Turns raw positions plus market data into signed `AssetWithPrice`
//! records. Price resolution per position, first applicable rule wins:
//!
//! 1. Cash: `amount × USD rate` for the currency embedded in the symbol.
//! 2. A user-entered custom price for the symbol.
//! 3. Market data via the lookup key, retrying a secondary key for crypto.
//! 4. Known stablecoins default to 1.0 instead of showing as worthless.
//!
//! Valuation is total: positions no rule resolves get price 0 and stay in
//! the output.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use omnifolio_prices::{CustomPriceMap, FxRateMap, PriceLookupProvider, PriceMap};

use crate::classification::{CategoryService, MainCategory};
use crate::constants::BASE_CURRENCY;
use crate::fx::{extract_currency_code, FxService};
use crate::positions::{AssetClass, AssetType, Position};

use super::valuation_model::AssetWithPrice;

/// Values positions and ranks them for display.
#[derive(Clone)]
pub struct PositionValuator {
    category_service: CategoryService,
    fx_service: FxService,
    price_provider: Arc<dyn PriceLookupProvider>,
}

/// Outcome of the price resolution ladder for one position.
struct PriceResolution {
    price: Decimal,
    unit_change24h: Decimal,
    change_percent24h: Decimal,
    has_custom_price: bool,
}

impl PriceResolution {
    fn flat(price: Decimal) -> Self {
        PriceResolution {
            price,
            unit_change24h: Decimal::ZERO,
            change_percent24h: Decimal::ZERO,
            has_custom_price: false,
        }
    }
}

impl PositionValuator {
    pub fn new(
        category_service: CategoryService,
        fx_service: FxService,
        price_provider: Arc<dyn PriceLookupProvider>,
    ) -> Self {
        Self {
            category_service,
            fx_service,
            price_provider,
        }
    }

    /// Values a single position.
    ///
    /// `allocation` is left at zero here; it is a portfolio-relative number
    /// filled in by [`value_positions`](Self::value_positions).
    pub fn value_position(
        &self,
        position: &Position,
        prices: &PriceMap,
        custom_prices: Option<&CustomPriceMap>,
        fx_rates: Option<&FxRateMap>,
    ) -> AssetWithPrice {
        let asset_class = position.effective_class();
        let hint = type_hint(position);
        let main_category = self.category_service.main_category(&position.symbol, hint);
        let sub_category = self.category_service.sub_category(&position.symbol, hint);

        // Amounts are non-negative by contract; direction comes from is_debt.
        // A negative amount would flip the sign twice, so clamp it out.
        let amount = if position.amount < Decimal::ZERO {
            warn!(
                "Position {} has negative amount {}; clamping to zero",
                position.id, position.amount
            );
            Decimal::ZERO
        } else {
            position.amount
        };

        let is_perp_notional = self
            .category_service
            .perp_trade_side(&position.name, position.protocol.as_deref())
            .is_some();

        // --- Resolve price ---
        let resolution =
            self.resolve_price(position, asset_class, main_category, prices, custom_prices, fx_rates);

        // --- Apply the debt sign rule ---
        // An appreciating borrowed asset harms the holder, so value and both
        // change fields flip together.
        let sign = if position.is_debt {
            dec!(-1)
        } else {
            Decimal::ONE
        };
        let value = amount * resolution.price * sign;
        let change24h = amount * resolution.unit_change24h * sign;
        let change_percent24h = resolution.change_percent24h * sign;

        // --- Unrealized gain ---
        // Only meaningful for owned assets with a resolved price.
        let (cost_basis_value, unrealized_gain, unrealized_gain_percent) = if position.is_debt
            || is_perp_notional
            || resolution.price <= Decimal::ZERO
        {
            (None, None, None)
        } else {
            match position.cost_basis {
                Some(cost_per_unit) => {
                    let total_cost = amount * cost_per_unit;
                    let gain = value - total_cost;
                    let percent = if total_cost > Decimal::ZERO {
                        (gain / total_cost * dec!(100)).round_dp(2)
                    } else if !gain.is_zero() {
                        dec!(100)
                    } else {
                        Decimal::ZERO
                    };
                    (Some(total_cost), Some(gain), Some(percent))
                }
                None => (None, None, None),
            }
        };

        AssetWithPrice {
            id: position.id.clone(),
            symbol: position.symbol.clone(),
            name: position.name.clone(),
            asset_class,
            main_category,
            sub_category,
            amount,
            cost_basis: position.cost_basis,
            is_debt: position.is_debt,
            account_id: position.account_id.clone(),
            protocol: position.protocol.clone(),
            chain: position.chain.clone(),
            current_price: resolution.price,
            value,
            change24h,
            change_percent24h,
            allocation: Decimal::ZERO,
            cost_basis_value,
            unrealized_gain,
            unrealized_gain_percent,
            has_custom_price: resolution.has_custom_price,
            is_perp_notional,
        }
    }

    /// Values the full position set, fills allocations and sorts.
    ///
    /// Allocation is each value's share of the positive, non-perp-notional
    /// total; perp notional always reads zero. The sort puts assets before
    /// debts, each group descending by absolute value; it is stable, so ties
    /// keep their input order.
    pub fn value_positions(
        &self,
        positions: &[Position],
        prices: &PriceMap,
        custom_prices: Option<&CustomPriceMap>,
        fx_rates: Option<&FxRateMap>,
    ) -> Vec<AssetWithPrice> {
        if positions.is_empty() {
            return Vec::new();
        }
        debug!("Valuing {} positions", positions.len());

        let mut assets: Vec<AssetWithPrice> = positions
            .iter()
            .map(|position| self.value_position(position, prices, custom_prices, fx_rates))
            .collect();

        let allocation_base: Decimal = assets
            .iter()
            .filter(|a| !a.is_perp_notional && a.value > Decimal::ZERO)
            .map(|a| a.value)
            .sum();

        for asset in assets.iter_mut() {
            asset.allocation = if asset.is_perp_notional || allocation_base <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                (asset.value / allocation_base * dec!(100)).round_dp(2)
            };
        }

        assets.sort_by(|a, b| {
            a.is_debt
                .cmp(&b.is_debt)
                .then_with(|| b.value.abs().cmp(&a.value.abs()))
        });

        assets
    }

    fn resolve_price(
        &self,
        position: &Position,
        asset_class: AssetClass,
        main_category: MainCategory,
        prices: &PriceMap,
        custom_prices: Option<&CustomPriceMap>,
        fx_rates: Option<&FxRateMap>,
    ) -> PriceResolution {
        // 1. Cash converts at the FX rate; it has no 24h movement.
        if asset_class == AssetClass::Cash {
            let currency = extract_currency_code(&position.symbol)
                .unwrap_or_else(|| BASE_CURRENCY.to_string());
            let rate = self.fx_service.rate_or_fallback(&currency, fx_rates);
            return PriceResolution::flat(rate);
        }

        // 2. A manual override wins over market data. No time series exists
        //    for it, so the 24h change reads zero.
        if let Some(custom) =
            custom_prices.and_then(|map| map.get(&position.symbol.to_lowercase()))
        {
            return PriceResolution {
                has_custom_price: true,
                ..PriceResolution::flat(custom.price)
            };
        }

        // 3. Market data. Wallet-sourced positions carry a precomputed key;
        //    manual ones translate through the provider catalog.
        let primary_key = position
            .price_key
            .clone()
            .or_else(|| self.price_provider.coin_id(&position.symbol))
            .unwrap_or_else(|| position.symbol.clone());
        let mut data = prices.get(&primary_key).cloned();

        // Crypto symbols often sit under a different id than expected, so a
        // zero or missing primary lookup retries the alternate key.
        let unresolved = data.as_ref().map_or(true, |d| d.price.is_zero());
        if unresolved && main_category == MainCategory::Crypto {
            let alternate_key = self.price_provider.alternate_key(&position.symbol);
            if alternate_key != primary_key {
                if let Some(retry) = prices.get(&alternate_key) {
                    debug!(
                        "Price for {} resolved via alternate key {}",
                        position.symbol, alternate_key
                    );
                    data = Some(retry.clone());
                }
            }
        }

        let resolution = match data {
            Some(data) => PriceResolution {
                price: data.price,
                unit_change24h: data.change24h,
                change_percent24h: data.change_percent24h,
                has_custom_price: false,
            },
            None => PriceResolution::flat(Decimal::ZERO),
        };

        // 4. A known peg never shows as worthless.
        if resolution.price.is_zero() && self.category_service.is_stablecoin(&position.symbol) {
            return PriceResolution::flat(Decimal::ONE);
        }

        resolution
    }
}

/// Instrument-type hint handed to the category service.
///
/// The effective class decides the coarse bucket; the raw type is consulted
/// only to keep the stock/ETF distinction for equities.
fn type_hint(position: &Position) -> Option<AssetType> {
    match position.effective_class() {
        AssetClass::Crypto => Some(AssetType::Crypto),
        AssetClass::Cash => Some(AssetType::Cash),
        AssetClass::Equity => match position.asset_type {
            Some(AssetType::Etf) => Some(AssetType::Etf),
            _ => Some(AssetType::Stock),
        },
        AssetClass::Other => None,
    }
}
