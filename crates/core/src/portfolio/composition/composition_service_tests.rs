//! Tests for composition analytics.

#[cfg(test)]
mod tests {
    use crate::classification::{CategoryService, MainCategory, SubCategory};
    use crate::portfolio::composition::{AllocationBucket, CompositionAnalyzer, RiskProfile};
    use crate::portfolio::valuation::AssetWithPrice;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn analyzer() -> CompositionAnalyzer {
        CompositionAnalyzer::new(CategoryService::new())
    }

    fn spot(symbol: &str, main: MainCategory, sub: SubCategory, value: Decimal) -> AssetWithPrice {
        AssetWithPrice {
            id: symbol.to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            main_category: main,
            sub_category: sub,
            amount: value.abs(),
            value,
            is_debt: value < Decimal::ZERO,
            ..AssetWithPrice::default()
        }
    }

    fn crypto(symbol: &str, sub: SubCategory, value: Decimal) -> AssetWithPrice {
        spot(symbol, MainCategory::Crypto, sub, value)
    }

    // --- Crypto metrics ---

    #[test]
    fn test_crypto_metrics_dominance() {
        let mut pepe = crypto("PEPE", SubCategory::Tokens, dec!(5000));
        pepe.protocol = Some("aave".to_string());
        let assets = vec![
            crypto("WBTC", SubCategory::Btc, dec!(50000)),
            crypto("WETH", SubCategory::Eth, dec!(30000)),
            crypto("USDC", SubCategory::Stablecoins, dec!(15000)),
            pepe,
        ];

        let metrics = analyzer().crypto_metrics(&assets);

        assert_eq!(metrics.net_value, dec!(100000));
        assert_eq!(metrics.btc_percentage, dec!(50));
        assert_eq!(metrics.eth_percentage, dec!(30));
        assert_eq!(metrics.stablecoin_percentage, dec!(15));
        assert_eq!(metrics.defi_percentage, dec!(5));
    }

    #[test]
    fn test_crypto_metrics_perp_venue_is_not_defi() {
        let mut parked = crypto("USDC", SubCategory::Stablecoins, dec!(2000));
        parked.protocol = Some("hyperliquid".to_string());
        let assets = vec![crypto("BTC", SubCategory::Btc, dec!(8000)), parked];

        let metrics = analyzer().crypto_metrics(&assets);

        assert_eq!(metrics.net_value, dec!(10000));
        assert_eq!(metrics.defi_percentage, Decimal::ZERO);
        assert_eq!(metrics.stablecoin_percentage, dec!(20));
    }

    #[test]
    fn test_crypto_metrics_ignores_other_sleeves_and_notional() {
        let mut notional = crypto("BTC", SubCategory::Btc, dec!(40000));
        notional.is_perp_notional = true;
        let assets = vec![
            crypto("BTC", SubCategory::Btc, dec!(10000)),
            spot("AAPL", MainCategory::Equities, SubCategory::Stocks, dec!(99000)),
            notional,
        ];

        let metrics = analyzer().crypto_metrics(&assets);

        assert_eq!(metrics.net_value, dec!(10000));
        assert_eq!(metrics.btc_percentage, dec!(100));
    }

    #[test]
    fn test_crypto_metrics_net_negative_guards_percentages() {
        let assets = vec![crypto("ETH", SubCategory::Eth, dec!(-5000))];

        let metrics = analyzer().crypto_metrics(&assets);

        assert_eq!(metrics.net_value, dec!(-5000));
        assert_eq!(metrics.eth_percentage, Decimal::ZERO);
    }

    // --- Allocation buckets ---

    #[test]
    fn test_allocation_breakdown_buckets_and_order() {
        let assets = vec![
            crypto("BTC", SubCategory::Btc, dec!(60000)),
            spot("AAPL", MainCategory::Equities, SubCategory::Stocks, dec!(25000)),
            crypto("USDC", SubCategory::Stablecoins, dec!(10000)),
            spot("CASH_EUR_x1", MainCategory::Cash, SubCategory::Cash, dec!(5000)),
        ];

        let breakdown = analyzer().allocation_breakdown(&assets);

        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].bucket, AllocationBucket::Crypto);
        assert_eq!(breakdown[0].value, dec!(60000));
        assert_eq!(breakdown[0].percentage, dec!(60));
        assert_eq!(breakdown[1].bucket, AllocationBucket::Equities);
        assert_eq!(breakdown[1].percentage, dec!(25));
        assert_eq!(breakdown[2].bucket, AllocationBucket::CashEquivalents);
        assert_eq!(breakdown[2].name, "Cash & Equivalents");
        assert_eq!(breakdown[2].value, dec!(15000));
        assert_eq!(breakdown[2].percentage, dec!(15));
    }

    #[test]
    fn test_allocation_breakdown_drops_net_negative_bucket() {
        let assets = vec![
            crypto("BTC", SubCategory::Btc, dec!(10000)),
            crypto("USDC", SubCategory::Stablecoins, dec!(-10000)),
            spot("CASH_USD_a1", MainCategory::Cash, SubCategory::Cash, dec!(4000)),
        ];

        let breakdown = analyzer().allocation_breakdown(&assets);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].bucket, AllocationBucket::Crypto);
        assert_eq!(breakdown[0].percentage, dec!(100));
    }

    // --- Risk profile ---

    #[test]
    fn test_risk_profile_tiers() {
        let assets = vec![
            crypto("USDC", SubCategory::Stablecoins, dec!(10000)),
            spot("AAPL", MainCategory::Equities, SubCategory::Stocks, dec!(20000)),
            crypto("WBTC", SubCategory::Btc, dec!(30000)),
            crypto("PEPE", SubCategory::Tokens, dec!(40000)),
        ];

        let tiers = analyzer().risk_profile(&assets);

        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].profile, RiskProfile::Moderate);
        assert_eq!(tiers[0].value, dec!(50000));
        assert_eq!(tiers[0].percentage, dec!(50));
        assert_eq!(tiers[1].profile, RiskProfile::Aggressive);
        assert_eq!(tiers[1].value, dec!(40000));
        assert_eq!(tiers[2].profile, RiskProfile::Conservative);
        assert_eq!(tiers[2].name, "Conservative");
        assert_eq!(tiers[2].percentage, dec!(10));
    }

    #[test]
    fn test_risk_profile_sol_and_unknown_tokens_are_aggressive() {
        let assets = vec![
            crypto("SOL", SubCategory::Sol, dec!(7000)),
            spot("GOLD", MainCategory::Other, SubCategory::Other, dec!(3000)),
        ];

        let tiers = analyzer().risk_profile(&assets);

        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].profile, RiskProfile::Aggressive);
        assert_eq!(tiers[0].value, dec!(10000));
    }

    // --- Cash breakdown ---

    #[test]
    fn test_cash_breakdown_rows_and_totals() {
        let assets = vec![
            spot("CASH_EUR_x1", MainCategory::Cash, SubCategory::Cash, dec!(5000)),
            spot("USD", MainCategory::Cash, SubCategory::Cash, dec!(4000)),
            crypto("USDC", SubCategory::Stablecoins, dec!(3000)),
            crypto("BTC", SubCategory::Btc, dec!(90000)),
        ];

        let cash = analyzer().cash_breakdown(&assets);

        assert_eq!(cash.total, dec!(12000));
        assert_eq!(cash.fiat_total, dec!(9000));
        assert_eq!(cash.stablecoin_total, dec!(3000));

        assert_eq!(cash.fiat.len(), 2);
        assert_eq!(cash.fiat[0].currency, "EUR");
        assert_eq!(cash.fiat[0].value, dec!(5000));
        assert_eq!(cash.fiat[0].percentage, dec!(41.67));
        assert_eq!(cash.fiat[1].currency, "USD");
        assert_eq!(cash.fiat[1].percentage, dec!(33.33));

        assert_eq!(cash.stablecoins.len(), 1);
        assert_eq!(cash.stablecoins[0].symbol, "USDC");
        assert_eq!(cash.stablecoins[0].underlying_currency.as_deref(), Some("USD"));
        assert_eq!(cash.stablecoins[0].percentage, dec!(25));
    }

    #[test]
    fn test_cash_breakdown_merges_rows_by_currency() {
        let assets = vec![
            spot("CASH_USD_a1", MainCategory::Cash, SubCategory::Cash, dec!(1000)),
            spot("CASH_USD_b2", MainCategory::Cash, SubCategory::Cash, dec!(2000)),
            crypto("usdc", SubCategory::Stablecoins, dec!(500)),
            crypto("USDC", SubCategory::Stablecoins, dec!(500)),
        ];

        let cash = analyzer().cash_breakdown(&assets);

        assert_eq!(cash.fiat.len(), 1);
        assert_eq!(cash.fiat[0].value, dec!(3000));
        assert_eq!(cash.stablecoins.len(), 1);
        assert_eq!(cash.stablecoins[0].symbol, "USDC");
        assert_eq!(cash.stablecoins[0].value, dec!(1000));
    }

    #[test]
    fn test_cash_breakdown_unparseable_symbol_falls_back_to_base() {
        let assets = vec![spot(
            "MY BANK BALANCE",
            MainCategory::Cash,
            SubCategory::Cash,
            dec!(700),
        )];

        let cash = analyzer().cash_breakdown(&assets);

        assert_eq!(cash.fiat.len(), 1);
        assert_eq!(cash.fiat[0].currency, "USD");
        assert_eq!(cash.fiat[0].percentage, dec!(100));
    }

    #[test]
    fn test_cash_breakdown_netting_and_clamp() {
        // Borrowed USDC exceeds the held balance; the netted row disappears
        // and the clamped totals never go negative.
        let assets = vec![
            crypto("USDC", SubCategory::Stablecoins, dec!(3000)),
            crypto("USDC", SubCategory::Stablecoins, dec!(-5000)),
            spot("CASH_USD_a1", MainCategory::Cash, SubCategory::Cash, dec!(1000)),
        ];

        let cash = analyzer().cash_breakdown(&assets);

        assert!(cash.stablecoins.is_empty());
        assert_eq!(cash.stablecoin_total, Decimal::ZERO);
        assert_eq!(cash.fiat_total, dec!(1000));
        assert_eq!(cash.total, Decimal::ZERO);
        assert_eq!(cash.fiat[0].percentage, dec!(100));
    }

    // --- Equities breakdown ---

    #[test]
    fn test_equities_breakdown_split() {
        let assets = vec![
            spot("AAPL", MainCategory::Equities, SubCategory::Stocks, dec!(6000)),
            spot("aapl", MainCategory::Equities, SubCategory::Stocks, dec!(4000)),
            spot("MSFT", MainCategory::Equities, SubCategory::Stocks, dec!(5000)),
            spot("VOO", MainCategory::Equities, SubCategory::Etfs, dec!(10000)),
            crypto("BTC", SubCategory::Btc, dec!(50000)),
        ];

        let equities = analyzer().equities_breakdown(&assets);

        assert_eq!(equities.total, dec!(25000));
        assert_eq!(equities.stocks_total, dec!(15000));
        assert_eq!(equities.etfs_total, dec!(10000));

        assert_eq!(equities.stocks.len(), 2);
        assert_eq!(equities.stocks[0].symbol, "AAPL");
        assert_eq!(equities.stocks[0].value, dec!(10000));
        assert_eq!(equities.stocks[0].percentage, dec!(40));
        assert_eq!(equities.stocks[1].symbol, "MSFT");
        assert_eq!(equities.stocks[1].percentage, dec!(20));

        assert_eq!(equities.etfs.len(), 1);
        assert_eq!(equities.etfs[0].symbol, "VOO");
        assert_eq!(equities.etfs[0].percentage, dec!(40));
    }

    #[test]
    fn test_equities_breakdown_drops_short_position() {
        let assets = vec![
            spot("TSLA", MainCategory::Equities, SubCategory::Stocks, dec!(-5000)),
            spot("VOO", MainCategory::Equities, SubCategory::Etfs, dec!(5000)),
        ];

        let equities = analyzer().equities_breakdown(&assets);

        assert!(equities.stocks.is_empty());
        assert_eq!(equities.stocks_total, Decimal::ZERO);
        assert_eq!(equities.etfs_total, dec!(5000));
        assert_eq!(equities.total, Decimal::ZERO);
        assert_eq!(equities.etfs[0].percentage, dec!(100));
    }

    // --- Empty input ---

    #[test]
    fn test_empty_assets_yield_defaults() {
        let analyzer = analyzer();

        assert_eq!(analyzer.crypto_metrics(&[]).net_value, Decimal::ZERO);
        assert!(analyzer.allocation_breakdown(&[]).is_empty());
        assert!(analyzer.risk_profile(&[]).is_empty());
        assert!(analyzer.cash_breakdown(&[]).fiat.is_empty());
        assert!(analyzer.equities_breakdown(&[]).stocks.is_empty());
    }
}
