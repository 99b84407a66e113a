//! Cash currency resolution.
//!
//! Cash positions are valued as `amount × USD rate`. Rates resolve per
//! currency: a caller-supplied live table wins, the built-in snapshot below
//! covers the common currencies when no live data arrived, and anything
//! still unknown falls back to USD parity so a calculation never aborts.

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use omnifolio_prices::FxRateMap;

use crate::{Error, Result};

/// Built-in USD conversion rates (USD per one unit of currency).
///
/// A coarse snapshot, refreshed occasionally; live rates supplied by the
/// caller always take precedence.
pub const DEFAULT_USD_RATES: &[(&str, &str)] = &[
    // Majors
    ("USD", "1.0"),
    ("EUR", "1.08"),
    ("GBP", "1.27"),
    ("CHF", "1.12"),
    ("JPY", "0.0067"),
    // Europe
    ("SEK", "0.095"),
    ("NOK", "0.094"),
    ("DKK", "0.145"),
    ("PLN", "0.25"),
    ("CZK", "0.043"),
    ("HUF", "0.0027"),
    ("TRY", "0.03"),
    // Asia-Pacific
    ("CNY", "0.14"),
    ("HKD", "0.128"),
    ("SGD", "0.74"),
    ("AUD", "0.66"),
    ("NZD", "0.61"),
    ("INR", "0.012"),
    ("KRW", "0.00072"),
    ("TWD", "0.031"),
    ("THB", "0.028"),
    ("IDR", "0.000063"),
    ("MYR", "0.021"),
    ("PHP", "0.017"),
    ("VND", "0.00004"),
    // Americas
    ("CAD", "0.73"),
    ("BRL", "0.18"),
    ("MXN", "0.055"),
    // Middle East & Africa
    ("ZAR", "0.053"),
    ("AED", "0.27"),
    ("SAR", "0.27"),
    ("ILS", "0.27"),
];

lazy_static! {
    /// Built-in rate lookup keyed by currency code.
    static ref DEFAULT_RATE_MAP: HashMap<&'static str, Decimal> = DEFAULT_USD_RATES
        .iter()
        .filter_map(|(code, rate)| Decimal::from_str(rate).ok().map(|r| (*code, r)))
        .collect();

    /// Currency embedded in generated cash symbols, e.g. "CASH_EUR_a1b2c3".
    static ref CASH_SYMBOL_PATTERN: Regex =
        Regex::new(r"^(?i)CASH[_-]([A-Za-z]{3,5})(?:[_-]|$)").expect("Invalid regex pattern");

    /// A bare 3-5 letter currency code used as the whole symbol.
    static ref BARE_CURRENCY_PATTERN: Regex =
        Regex::new(r"^[A-Za-z]{3,5}$").expect("Invalid regex pattern");
}

/// Extracts the currency code from a cash position symbol.
///
/// Recognizes generated symbols like "CASH_EUR_x1" as well as bare codes
/// like "EUR". Returns the uppercased code.
pub fn extract_currency_code(symbol: &str) -> Option<String> {
    let symbol = symbol.trim();
    if let Some(captures) = CASH_SYMBOL_PATTERN.captures(symbol) {
        return captures.get(1).map(|m| m.as_str().to_uppercase());
    }
    if BARE_CURRENCY_PATTERN.is_match(symbol) {
        return Some(symbol.to_uppercase());
    }
    None
}

/// Resolves USD rates for cash currencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FxService;

impl FxService {
    pub fn new() -> Self {
        FxService
    }

    /// USD rate for a currency, falling back to parity when unknown.
    ///
    /// Resolution order per currency: the live table, the built-in
    /// defaults, then 1.0 with a warning. Non-positive live rates are
    /// ignored rather than propagated into valuations.
    pub fn rate_or_fallback(&self, currency: &str, live_rates: Option<&FxRateMap>) -> Decimal {
        let code = currency.trim().to_uppercase();

        if let Some(rates) = live_rates {
            if let Some(rate) = lookup_live_rate(rates, &code) {
                if rate > Decimal::ZERO {
                    return rate;
                }
                warn!("Ignoring non-positive live FX rate {} for {}", rate, code);
            }
        }
        if let Some(rate) = DEFAULT_RATE_MAP.get(code.as_str()) {
            return *rate;
        }
        warn!("No FX rate for currency {}; assuming USD parity", code);
        Decimal::ONE
    }

    /// Strict variant used at the mutation boundary: unknown currencies and
    /// invalid live rates are errors instead of fallbacks.
    pub fn try_rate(&self, currency: &str, live_rates: Option<&FxRateMap>) -> Result<Decimal> {
        let code = currency.trim().to_uppercase();

        if let Some(rates) = live_rates {
            if let Some(rate) = lookup_live_rate(rates, &code) {
                if rate <= Decimal::ZERO {
                    return Err(Error::InvalidExchangeRate(format!(
                        "rate {} for currency {}",
                        rate, code
                    )));
                }
                return Ok(rate);
            }
        }
        DEFAULT_RATE_MAP
            .get(code.as_str())
            .copied()
            .ok_or(Error::UnsupportedCurrency(code))
    }
}

/// Case-insensitive lookup into a caller-supplied rate table.
fn lookup_live_rate(rates: &FxRateMap, code: &str) -> Option<Decimal> {
    if let Some(rate) = rates.get(code) {
        return Some(*rate);
    }
    rates
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(code))
        .map(|(_, rate)| *rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn live_rates(pairs: &[(&str, Decimal)]) -> FxRateMap {
        pairs
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    #[test]
    fn test_live_rate_wins_over_builtin() {
        let svc = FxService::new();
        let rates = live_rates(&[("EUR", dec!(1.12))]);
        assert_eq!(svc.rate_or_fallback("EUR", Some(&rates)), dec!(1.12));
    }

    #[test]
    fn test_builtin_covers_missing_live_entry() {
        let svc = FxService::new();
        let rates = live_rates(&[("GBP", dec!(1.30))]);
        assert_eq!(svc.rate_or_fallback("EUR", Some(&rates)), dec!(1.08));
        assert_eq!(svc.rate_or_fallback("EUR", None), dec!(1.08));
    }

    #[test]
    fn test_unknown_currency_falls_back_to_parity() {
        let svc = FxService::new();
        assert_eq!(svc.rate_or_fallback("XXX", None), dec!(1));
    }

    #[test]
    fn test_non_positive_live_rate_is_ignored() {
        let svc = FxService::new();
        let rates = live_rates(&[("EUR", dec!(0))]);
        assert_eq!(svc.rate_or_fallback("EUR", Some(&rates)), dec!(1.08));
    }

    #[test]
    fn test_live_lookup_is_case_insensitive() {
        let svc = FxService::new();
        let rates = live_rates(&[("eur", dec!(1.10))]);
        assert_eq!(svc.rate_or_fallback("EUR", Some(&rates)), dec!(1.10));
    }

    #[test]
    fn test_try_rate_rejects_unknown_and_invalid() {
        let svc = FxService::new();
        assert!(svc.try_rate("XXX", None).is_err());

        let rates = live_rates(&[("EUR", dec!(-1))]);
        assert!(svc.try_rate("EUR", Some(&rates)).is_err());

        assert_eq!(svc.try_rate("CHF", None).unwrap(), dec!(1.12));
    }

    #[test]
    fn test_extract_currency_code_from_generated_symbol() {
        assert_eq!(
            extract_currency_code("CASH_EUR_a1b2c3").as_deref(),
            Some("EUR")
        );
        assert_eq!(
            extract_currency_code("cash_chf_9f8e").as_deref(),
            Some("CHF")
        );
        assert_eq!(extract_currency_code("CASH-GBP").as_deref(), Some("GBP"));
    }

    #[test]
    fn test_extract_currency_code_from_bare_code() {
        assert_eq!(extract_currency_code("USD").as_deref(), Some("USD"));
        assert_eq!(extract_currency_code("eur").as_deref(), Some("EUR"));
        assert_eq!(extract_currency_code(" NOK ").as_deref(), Some("NOK"));
    }

    #[test]
    fn test_extract_currency_code_rejects_other_shapes() {
        assert_eq!(extract_currency_code("CASH_E_1"), None);
        assert_eq!(extract_currency_code("US"), None);
        assert_eq!(extract_currency_code("LONGSYMBOL"), None);
        assert_eq!(extract_currency_code(""), None);
    }
}
