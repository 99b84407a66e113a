//! Static lookup tables backing symbol classification.
//!
//! Tables are keyed by lowercase symbol. They never change at runtime, so
//! the derived maps are built once and shared.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Stablecoin symbols mapped to the fiat currency they track.
pub const STABLECOIN_FIAT: &[(&str, &str)] = &[
    // Major USD stablecoins
    ("usdt", "USD"),
    ("usdc", "USD"),
    ("dai", "USD"),
    ("usde", "USD"),
    ("usds", "USD"),
    ("fdusd", "USD"),
    ("pyusd", "USD"),
    ("tusd", "USD"),
    ("usdp", "USD"),
    ("gusd", "USD"),
    // Yield-bearing wrappers
    ("susde", "USD"),
    ("susds", "USD"),
    ("sdai", "USD"),
    ("usdy", "USD"),
    ("usdm", "USD"),
    ("usdl", "USD"),
    // DeFi-native USD
    ("lusd", "USD"),
    ("gho", "USD"),
    ("crvusd", "USD"),
    ("frax", "USD"),
    ("susd", "USD"),
    ("dola", "USD"),
    ("mim", "USD"),
    ("alusd", "USD"),
    ("eusd", "USD"),
    ("mkusd", "USD"),
    ("fxusd", "USD"),
    ("usda", "USD"),
    ("usd0", "USD"),
    ("usdd", "USD"),
    // Exchange-issued and newer entrants
    ("usd1", "USD"),
    ("rlusd", "USD"),
    ("usdtb", "USD"),
    ("deusd", "USD"),
    ("usdx", "USD"),
    ("usdb", "USD"),
    ("ausd", "USD"),
    ("usdg", "USD"),
    ("husd", "USD"),
    ("busd", "USD"),
    // Bridged variants reported by wallet indexers
    ("usdt.e", "USD"),
    ("usdc.e", "USD"),
    ("usdbc", "USD"),
    ("axlusdc", "USD"),
    ("usdce", "USD"),
    // Euro
    ("eurc", "EUR"),
    ("eurt", "EUR"),
    ("eurs", "EUR"),
    ("ageur", "EUR"),
    ("eure", "EUR"),
    ("ceur", "EUR"),
    ("eurcv", "EUR"),
    // Other fiat pegs
    ("gbpt", "GBP"),
    ("vchf", "CHF"),
    ("zchf", "CHF"),
    ("gyen", "JPY"),
    ("jpyc", "JPY"),
    ("xsgd", "SGD"),
    ("xidr", "IDR"),
    ("bidr", "IDR"),
    ("idrt", "IDR"),
    ("brz", "BRL"),
    ("cadc", "CAD"),
    ("qcad", "CAD"),
    ("nzds", "NZD"),
    ("tryb", "TRY"),
    ("mxnt", "MXN"),
    ("cnht", "CNY"),
    ("zarp", "ZAR"),
    ("audd", "AUD"),
];

/// Bitcoin plus wrapped and staked representations of it.
pub const BTC_LIKE_SYMBOLS: &[&str] = &[
    "btc", "wbtc", "cbbtc", "tbtc", "lbtc", "ebtc", "solvbtc", "fbtc", "btcb", "btc.b", "pumpbtc",
    "unibtc", "renbtc", "hbtc",
];

/// Ether plus liquid-staking and restaking wrappers.
pub const ETH_LIKE_SYMBOLS: &[&str] = &[
    "eth", "weth", "steth", "wsteth", "reth", "cbeth", "weeth", "eeth", "ezeth", "rseth", "meth",
    "oseth", "sweth", "ankreth", "frxeth", "sfrxeth", "lseth", "ethx", "beth",
];

/// SOL plus liquid-staking tokens.
pub const SOL_LIKE_SYMBOLS: &[&str] = &[
    "sol", "wsol", "msol", "jitosol", "bsol", "jsol", "stsol", "bnsol", "hsol", "dsol",
];

/// Symbols of well-known ETFs.
///
/// Rescues positions recorded with the legacy `stock` type before the ETF
/// distinction existed. Exchange suffixes are stripped before lookup.
pub const KNOWN_ETF_SYMBOLS: &[&str] = &[
    // US broad market
    "spy", "voo", "ivv", "vti", "qqq", "qqqm", "iwm", "dia", "vt", "acwi", "vxus", "vea", "vwo",
    "efa", "eem", "ijh", "ijr",
    // US style and dividend
    "vtv", "vug", "vig", "vym", "schd", "schg", "schb", "jepi", "jepq",
    // Sector and thematic
    "xlk", "xlf", "xle", "xlv", "xli", "xlp", "xly", "smh", "soxx", "vgt", "arkk", "ibit",
    // Bonds and commodities
    "agg", "bnd", "tlt", "ief", "shy", "lqd", "hyg", "gld", "iau", "slv", "vnq",
    // Europe-listed UCITS
    "cw8", "iwda", "vwce", "vwrl", "eunl", "sxr8", "cspx", "vusa", "meud", "eqac",
];

/// Exchange suffixes found on European listings (e.g. "CW8.PA", "SXR8.DE").
pub const EXCHANGE_SUFFIXES: &[&str] = &[
    ".pa", ".de", ".as", ".mi", ".l", ".sw", ".to", ".v", ".mc", ".br", ".ls", ".vi", ".st",
    ".he", ".co", ".ol", ".ir",
];

/// Venues whose positions are perpetual-futures accounts.
pub const PERP_PROTOCOLS: &[&str] = &["hyperliquid", "lighter", "ethereal"];

lazy_static! {
    /// Stablecoin fiat lookup keyed by lowercase symbol.
    pub static ref STABLECOIN_BY_SYMBOL: HashMap<&'static str, &'static str> =
        STABLECOIN_FIAT.iter().copied().collect();
}

/// Strips a known exchange suffix from an already-lowercased symbol.
pub fn strip_exchange_suffix(symbol: &str) -> &str {
    for suffix in EXCHANGE_SUFFIXES {
        if let Some(stripped) = symbol.strip_suffix(suffix) {
            if !stripped.is_empty() {
                return stripped;
            }
        }
    }
    symbol
}
