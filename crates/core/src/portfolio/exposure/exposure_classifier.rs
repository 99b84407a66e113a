//! Exposure classification of valued positions.

use crate::classification::{CategoryService, MainCategory, PerpSide};
use crate::portfolio::valuation::AssetWithPrice;

use super::exposure_model::ExposureClass;

/// Assigns each valued position one [`ExposureClass`].
///
/// The rules form an ordered decision table; a later rule can only fire
/// when every earlier rule declined. The order carries meaning: a borrowed
/// stablecoin must reach the borrowed-cash rule before the generic debt
/// rule would mark it a directional short, and a named trade on a perp
/// venue outranks the venue's margin rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExposureClassifier {
    category_service: CategoryService,
}

impl ExposureClassifier {
    pub fn new(category_service: CategoryService) -> Self {
        Self { category_service }
    }

    /// Classifies one valued position. Total: every input gets a class.
    ///
    /// 1. Perp venue, name parses as a trade -> `PerpLong` / `PerpShort`.
    /// 2. Perp venue, cash equivalent -> `PerpMargin` (collateral).
    /// 3. Perp venue otherwise -> `PerpSpot`.
    /// 4. Cash equivalent held as debt -> `BorrowedCash`.
    /// 5. Cash equivalent -> `Cash`.
    /// 6. Any other debt -> `SpotShort`.
    /// 7. Everything else -> `SpotLong`.
    pub fn classify(&self, asset: &AssetWithPrice) -> ExposureClass {
        let on_perp_venue = asset
            .protocol
            .as_deref()
            .is_some_and(|protocol| self.category_service.is_perp_protocol(protocol));
        let cash_equivalent = asset.main_category == MainCategory::Cash
            || self.category_service.is_cash_equivalent(&asset.symbol);

        if on_perp_venue {
            if let Some(side) = self
                .category_service
                .perp_trade_side(&asset.name, asset.protocol.as_deref())
            {
                return match side {
                    PerpSide::Short => ExposureClass::PerpShort,
                    PerpSide::Long => ExposureClass::PerpLong,
                };
            }
            if cash_equivalent {
                return ExposureClass::PerpMargin;
            }
            return ExposureClass::PerpSpot;
        }

        if cash_equivalent {
            return if asset.is_debt {
                ExposureClass::BorrowedCash
            } else {
                ExposureClass::Cash
            };
        }

        if asset.is_debt {
            return ExposureClass::SpotShort;
        }

        ExposureClass::SpotLong
    }
}
