//! FX (Foreign Exchange) module - USD rate resolution for cash positions.

mod fx_service;

pub use fx_service::{extract_currency_code, FxService, DEFAULT_USD_RATES};
