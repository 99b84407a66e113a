//! Composition views: dominance metrics, allocation buckets, risk tiers
//! and the cash/equities drill-downs.

mod composition_model;
mod composition_service;
mod composition_service_tests;

pub use composition_model::{
    AllocationBreakdownItem, AllocationBucket, CashBreakdownResult, CryptoMetrics,
    EquitiesBreakdownResult, EquityPositionItem, FiatCashItem, RiskProfile, RiskProfileItem,
    StablecoinCashItem,
};
pub use composition_service::CompositionAnalyzer;
