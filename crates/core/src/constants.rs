/// Reporting currency for every value produced by the engine
pub const BASE_CURRENCY: &str = "USD";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Assumed average leverage across open perpetual positions.
///
/// Exchanges do not report real margin requirements, so margin usage is
/// estimated as gross notional divided by this factor. Callers can supply
/// their own factor via `ExposureAggregator::with_assumed_leverage`.
pub const ASSUMED_AVERAGE_LEVERAGE: i64 = 5;
