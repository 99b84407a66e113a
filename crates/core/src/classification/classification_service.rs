//! Symbol classification service.
//!
//! Stateless lookups over static tables: main/sub category assignment,
//! stablecoin detection, and perp-venue recognition. Classification is a
//! total function; unknown symbols land in `other` rather than failing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::positions::AssetType;

use super::classification_model::{Category, MainCategory, PerpSide, SubCategory};
use super::classification_tables::{
    strip_exchange_suffix, BTC_LIKE_SYMBOLS, ETH_LIKE_SYMBOLS, KNOWN_ETF_SYMBOLS, PERP_PROTOCOLS,
    SOL_LIKE_SYMBOLS, STABLECOIN_BY_SYMBOL, STABLECOIN_FIAT,
};

lazy_static! {
    /// Trade-direction suffix in perp position names, e.g. "BTC Long (Hyperliquid)"
    /// or "ETH Short". The mandatory leading space keeps names like
    /// "Longhorn Token" from matching.
    static ref PERP_TRADE_PATTERN: Regex =
        Regex::new(r"(?i) (long|short)(\s*\(|$)").expect("Invalid regex pattern");
}

/// Classifies symbols into the category taxonomy.
///
/// The service carries no state beyond the compiled tables, so a single
/// instance can be shared freely across concurrent calculations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        CategoryService
    }

    /// Resolves the top-level category of a symbol.
    ///
    /// An explicit instrument type always wins. Without one, the symbol is
    /// checked against the crypto lookup sets, then the known-ETF table.
    pub fn main_category(&self, symbol: &str, asset_type: Option<AssetType>) -> MainCategory {
        match asset_type {
            Some(AssetType::Cash) => return MainCategory::Cash,
            Some(AssetType::Stock) | Some(AssetType::Etf) => return MainCategory::Equities,
            Some(AssetType::Crypto) => return MainCategory::Crypto,
            None => {}
        }

        let symbol = normalize_symbol(symbol);
        if is_known_crypto(&symbol) {
            return MainCategory::Crypto;
        }
        if KNOWN_ETF_SYMBOLS.contains(&strip_exchange_suffix(&symbol)) {
            return MainCategory::Equities;
        }
        MainCategory::Other
    }

    /// Resolves the sub-category of a symbol within its main category.
    pub fn sub_category(&self, symbol: &str, asset_type: Option<AssetType>) -> SubCategory {
        match self.main_category(symbol, asset_type) {
            MainCategory::Crypto => self.crypto_sub_category(symbol),
            MainCategory::Equities => {
                // An explicit ETF type wins; the known-ETF table rescues
                // positions recorded as plain stocks before the distinction
                // existed.
                if asset_type == Some(AssetType::Etf) {
                    return SubCategory::Etfs;
                }
                let symbol = normalize_symbol(symbol);
                if KNOWN_ETF_SYMBOLS.contains(&strip_exchange_suffix(&symbol)) {
                    SubCategory::Etfs
                } else {
                    SubCategory::Stocks
                }
            }
            MainCategory::Cash => SubCategory::Cash,
            MainCategory::Other => SubCategory::Other,
        }
    }

    /// Convenience combining both levels.
    pub fn category(&self, symbol: &str, asset_type: Option<AssetType>) -> Category {
        Category::new(
            self.main_category(symbol, asset_type),
            self.sub_category(symbol, asset_type),
        )
    }

    /// True when the symbol is a known stablecoin.
    pub fn is_stablecoin(&self, symbol: &str) -> bool {
        STABLECOIN_BY_SYMBOL.contains_key(normalize_symbol(symbol).as_str())
    }

    /// Fiat currency a stablecoin tracks.
    ///
    /// Pendle principal/yield tokens resolve via the ticker embedded in the
    /// symbol, so "PT-sUSDe-29MAY2025" maps to USD.
    pub fn underlying_fiat_currency(&self, symbol: &str) -> Option<&'static str> {
        let symbol = normalize_symbol(symbol);
        if let Some(fiat) = STABLECOIN_BY_SYMBOL.get(symbol.as_str()) {
            return Some(fiat);
        }
        let rest = strip_pendle_prefix(&symbol)?;
        longest_embedded_ticker(rest, STABLECOIN_FIAT.iter().map(|(symbol, _)| *symbol))
            .and_then(|ticker| STABLECOIN_BY_SYMBOL.get(ticker).copied())
    }

    /// True for assets treated as cash-like by exposure rules: stablecoins
    /// and Pendle principal tokens (fixed-maturity, no directional risk).
    pub fn is_cash_equivalent(&self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        STABLECOIN_BY_SYMBOL.contains_key(symbol.as_str()) || symbol.starts_with("pt-")
    }

    /// True when the protocol or account name refers to a perp venue.
    ///
    /// Substring match, so "Hyperliquid Perpetual" is recognized.
    pub fn is_perp_protocol(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        PERP_PROTOCOLS.iter().any(|venue| name.contains(venue))
    }

    /// Detects a leveraged perp trade from its display name and protocol.
    ///
    /// Both conditions must hold: the name carries a long/short marker and
    /// the protocol is a recognized perp venue. Returns the trade direction.
    pub fn perp_trade_side(&self, name: &str, protocol: Option<&str>) -> Option<PerpSide> {
        let protocol = protocol?;
        if !self.is_perp_protocol(protocol) {
            return None;
        }
        let captures = PERP_TRADE_PATTERN.captures(name)?;
        let side = captures.get(1)?.as_str();
        if side.eq_ignore_ascii_case("long") {
            Some(PerpSide::Long)
        } else {
            Some(PerpSide::Short)
        }
    }

    fn crypto_sub_category(&self, symbol: &str) -> SubCategory {
        let symbol = normalize_symbol(symbol);
        let symbol = symbol.as_str();

        if STABLECOIN_BY_SYMBOL.contains_key(symbol) {
            return SubCategory::Stablecoins;
        }
        if BTC_LIKE_SYMBOLS.contains(&symbol) {
            return SubCategory::Btc;
        }
        if ETH_LIKE_SYMBOLS.contains(&symbol) {
            return SubCategory::Eth;
        }
        if SOL_LIKE_SYMBOLS.contains(&symbol) {
            return SubCategory::Sol;
        }
        if let Some(rest) = strip_pendle_prefix(symbol) {
            if let Some(sub) = pendle_sub_category(rest) {
                return sub;
            }
        }
        SubCategory::Tokens
    }
}

/// Lowercases and trims a symbol for table lookups.
fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_lowercase()
}

/// True when the symbol appears in any crypto lookup set.
fn is_known_crypto(symbol: &str) -> bool {
    STABLECOIN_BY_SYMBOL.contains_key(symbol)
        || BTC_LIKE_SYMBOLS.contains(&symbol)
        || ETH_LIKE_SYMBOLS.contains(&symbol)
        || SOL_LIKE_SYMBOLS.contains(&symbol)
}

/// Strips the Pendle principal/yield token prefix, if any.
fn strip_pendle_prefix(symbol: &str) -> Option<&str> {
    symbol
        .strip_prefix("pt-")
        .or_else(|| symbol.strip_prefix("yt-"))
}

/// Categorizes a Pendle token by the underlying ticker embedded in its
/// symbol, e.g. "pt-weeth-26jun2025" → ETH. Longest match wins so "wsteth"
/// beats the bare "eth" it contains.
fn pendle_sub_category(rest: &str) -> Option<SubCategory> {
    let candidates = STABLECOIN_FIAT
        .iter()
        .map(|(symbol, _)| (*symbol, SubCategory::Stablecoins))
        .chain(BTC_LIKE_SYMBOLS.iter().map(|s| (*s, SubCategory::Btc)))
        .chain(ETH_LIKE_SYMBOLS.iter().map(|s| (*s, SubCategory::Eth)))
        .chain(SOL_LIKE_SYMBOLS.iter().map(|s| (*s, SubCategory::Sol)));

    let mut best: Option<(&str, SubCategory)> = None;
    for (ticker, sub) in candidates {
        if rest.contains(ticker) && best.map_or(true, |(b, _)| ticker.len() > b.len()) {
            best = Some((ticker, sub));
        }
    }
    best.map(|(_, sub)| sub)
}

/// Longest ticker from `candidates` contained in `rest`.
fn longest_embedded_ticker<'a>(
    rest: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates
        .filter(|ticker| rest.contains(*ticker))
        .max_by_key(|ticker| ticker.len())
}
