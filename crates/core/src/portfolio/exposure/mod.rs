//! Exposure classification and aggregation.

mod exposure_classifier;
mod exposure_model;
mod exposure_service;
mod exposure_service_tests;

pub use exposure_classifier::ExposureClassifier;
pub use exposure_model::{
    CategoryNode, ConcentrationMetrics, ExposureClass, ExposureData, ExposureMetrics, PerpTrade,
    PerpsBreakdown, SpotVsDerivatives,
};
pub use exposure_service::ExposureAggregator;
