//! Portfolio engine - valuation, exposure, custody and composition views.
//!
//! Everything in this module is pure: positions, prices and accounts go in,
//! serializable analytics come out. The `summary` module hosts the
//! composition root that wires the individual services together.

pub mod composition;
pub mod custody;
pub mod exposure;
pub mod summary;
pub mod valuation;

pub use composition::{
    AllocationBreakdownItem, AllocationBucket, CashBreakdownResult, CompositionAnalyzer,
    CryptoMetrics, EquitiesBreakdownResult, EquityPositionItem, FiatCashItem, RiskProfile,
    RiskProfileItem, StablecoinCashItem,
};
pub use custody::{ChainBreakdownItem, CustodyAnalyzer, CustodyBreakdownItem, CustodyKind};
pub use exposure::{
    CategoryNode, ConcentrationMetrics, ExposureAggregator, ExposureClass, ExposureClassifier,
    ExposureData, ExposureMetrics, PerpTrade, PerpsBreakdown, SpotVsDerivatives,
};
pub use summary::{LargestPosition, PortfolioCalculator, PortfolioSummary};
pub use valuation::{AssetWithPrice, PositionValuator};
