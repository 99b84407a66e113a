//! Table-driven CoinGecko symbol catalog.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::PriceLookupProvider;

/// Known symbol -> CoinGecko id pairs.
///
/// This whitelist covers the majors plus the wrapped/staked variants and
/// stablecoins that commonly show up in wallet scans. Symbols missing here
/// fall back to their lower-cased form as the lookup key, which is how
/// wallet-sourced price maps are keyed anyway.
const COINGECKO_IDS: &[(&str, &str)] = &[
    // Bitcoin and wrappers
    ("btc", "bitcoin"),
    ("wbtc", "wrapped-bitcoin"),
    ("cbbtc", "coinbase-wrapped-btc"),
    ("tbtc", "tbtc"),
    ("lbtc", "lombard-staked-btc"),
    // Ether and liquid staking
    ("eth", "ethereum"),
    ("weth", "weth"),
    ("steth", "staked-ether"),
    ("wsteth", "wrapped-steth"),
    ("reth", "rocket-pool-eth"),
    ("cbeth", "coinbase-wrapped-staked-eth"),
    ("weeth", "wrapped-eeth"),
    ("ezeth", "renzo-restaked-eth"),
    ("rseth", "kelp-dao-restaked-eth"),
    // Solana and liquid staking
    ("sol", "solana"),
    ("msol", "msol"),
    ("jitosol", "jito-staked-sol"),
    ("jupsol", "jupiter-staked-sol"),
    ("bnsol", "binance-staked-sol"),
    // USD stablecoins
    ("usdt", "tether"),
    ("usdc", "usd-coin"),
    ("dai", "dai"),
    ("sdai", "savings-dai"),
    ("usde", "ethena-usde"),
    ("susde", "ethena-staked-usde"),
    ("usds", "usds"),
    ("fdusd", "first-digital-usd"),
    ("pyusd", "paypal-usd"),
    ("tusd", "true-usd"),
    ("usdp", "paxos-standard"),
    ("gusd", "gemini-dollar"),
    ("frax", "frax"),
    ("lusd", "liquity-usd"),
    ("crvusd", "crvusd"),
    ("gho", "gho"),
    ("usd0", "usual-usd"),
    ("usdy", "ondo-us-dollar-yield"),
    ("rlusd", "ripple-usd"),
    ("usdd", "usdd"),
    // Non-USD stablecoins
    ("eurs", "stasis-eurs"),
    ("eurc", "euro-coin"),
    ("eure", "monerium-eur-money"),
    ("xsgd", "xsgd"),
    ("gyen", "gyen"),
    // Layer 1 / layer 2 majors
    ("bnb", "binancecoin"),
    ("xrp", "ripple"),
    ("ada", "cardano"),
    ("doge", "dogecoin"),
    ("shib", "shiba-inu"),
    ("avax", "avalanche-2"),
    ("dot", "polkadot"),
    ("matic", "matic-network"),
    ("pol", "polygon-ecosystem-token"),
    ("atom", "cosmos"),
    ("near", "near"),
    ("ltc", "litecoin"),
    ("bch", "bitcoin-cash"),
    ("etc", "ethereum-classic"),
    ("xlm", "stellar"),
    ("trx", "tron"),
    ("ton", "the-open-network"),
    ("apt", "aptos"),
    ("sui", "sui"),
    ("arb", "arbitrum"),
    ("op", "optimism"),
    ("strk", "starknet"),
    ("inj", "injective-protocol"),
    ("sei", "sei-network"),
    ("tia", "celestia"),
    ("kas", "kaspa"),
    ("mnt", "mantle"),
    ("icp", "internet-computer"),
    ("hbar", "hedera-hashgraph"),
    ("algo", "algorand"),
    ("xtz", "tezos"),
    ("vet", "vechain"),
    ("fil", "filecoin"),
    // DeFi blue chips
    ("link", "chainlink"),
    ("uni", "uniswap"),
    ("aave", "aave"),
    ("mkr", "maker"),
    ("ldo", "lido-dao"),
    ("crv", "curve-dao-token"),
    ("snx", "havven"),
    ("comp", "compound-governance-token"),
    ("sushi", "sushi"),
    ("pendle", "pendle"),
    ("gmx", "gmx"),
    ("dydx", "dydx-chain"),
    ("ena", "ethena"),
    ("morpho", "morpho"),
    ("eigen", "eigenlayer"),
    ("ondo", "ondo-finance"),
    ("grt", "the-graph"),
    ("zro", "layerzero"),
    ("w", "wormhole"),
    // Solana ecosystem
    ("jup", "jupiter-exchange-solana"),
    ("jto", "jito-governance-token"),
    ("pyth", "pyth-network"),
    ("ray", "raydium"),
    ("orca", "orca"),
    ("bonk", "bonk"),
    ("wif", "dogwifcoin"),
    // Perp-DEX ecosystem
    ("hype", "hyperliquid"),
    // Misc majors
    ("pepe", "pepe"),
    ("fet", "fetch-ai"),
    ("render", "render-token"),
    ("imx", "immutable-x"),
    ("okb", "okb"),
];

lazy_static! {
    static ref ID_BY_SYMBOL: HashMap<&'static str, &'static str> =
        COINGECKO_IDS.iter().copied().collect();
}

/// Bundled [`PriceLookupProvider`] backed by the static CoinGecko table.
///
/// Stateless and immutable; construct once and share via `Arc`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinGeckoCatalog;

impl CoinGeckoCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl PriceLookupProvider for CoinGeckoCatalog {
    fn coin_id(&self, symbol: &str) -> Option<String> {
        ID_BY_SYMBOL
            .get(symbol.to_lowercase().as_str())
            .map(|id| (*id).to_string())
    }

    fn alternate_key(&self, symbol: &str) -> String {
        symbol.to_lowercase()
    }
}
