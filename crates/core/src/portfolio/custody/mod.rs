//! Custody and chain breakdowns.

mod custody_model;
mod custody_service;

pub use custody_model::{ChainBreakdownItem, CustodyBreakdownItem, CustodyKind};
pub use custody_service::CustodyAnalyzer;
