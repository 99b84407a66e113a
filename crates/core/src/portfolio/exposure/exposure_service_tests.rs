//! Tests for exposure aggregation.

#[cfg(test)]
mod tests {
    use crate::classification::{CategoryService, MainCategory, PerpSide, SubCategory};
    use crate::portfolio::exposure::ExposureAggregator;
    use crate::portfolio::valuation::AssetWithPrice;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn aggregator() -> ExposureAggregator {
        ExposureAggregator::new(CategoryService::new())
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

    fn margin(symbol: &str, value: Decimal) -> AssetWithPrice {
        AssetWithPrice {
            protocol: Some("hyperliquid".to_string()),
            ..spot(symbol, MainCategory::Crypto, SubCategory::Stablecoins, value)
        }
    }

    fn perp(symbol: &str, name: &str, notional: Decimal) -> AssetWithPrice {
        AssetWithPrice {
            name: name.to_string(),
            protocol: Some("hyperliquid".to_string()),
            is_perp_notional: true,
            ..spot(symbol, MainCategory::Crypto, SubCategory::Tokens, notional)
        }
    }

    #[test]
    fn test_borrowed_stablecoin_portfolio() {
        // Spot holdings plus borrowed USDC whose proceeds are still held.
        let assets = vec![
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(50000)),
            spot("ETH", MainCategory::Crypto, SubCategory::Eth, dec!(30000)),
            spot(
                "USDC",
                MainCategory::Crypto,
                SubCategory::Stablecoins,
                dec!(10000),
            ),
            spot(
                "USDC",
                MainCategory::Crypto,
                SubCategory::Stablecoins,
                dec!(-10000),
            ),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.exposure.gross_assets, dec!(90000));
        assert_eq!(data.exposure.total_debts, dec!(10000));
        assert_eq!(data.exposure.net_worth, dec!(80000));
        assert_eq!(
            data.exposure.short_exposure,
            Decimal::ZERO,
            "borrowed cash is leverage, not a short"
        );
        assert_eq!(data.exposure.long_exposure, dec!(80000));
        assert_eq!(data.exposure.leverage, dec!(1));
        assert_eq!(data.exposure.debt_ratio, dec!(11.11));
        assert_eq!(data.exposure.cash_percentage, dec!(11.11));

        // Net worth equals the signed sum of non-notional values.
        let signed_sum: Decimal = assets.iter().map(|a| a.value).sum();
        assert_eq!(data.exposure.net_worth, signed_sum);
    }

    #[test]
    fn test_leveraged_perp_portfolio() {
        let assets = vec![
            margin("USDC", dec!(10000)),
            perp("BTC", "BTC Long (Hyperliquid)", dec!(100000)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(
            data.exposure.net_worth,
            dec!(10000),
            "notional never enters net worth"
        );
        assert_eq!(data.exposure.long_exposure, dec!(100000));
        assert_eq!(data.exposure.leverage, dec!(10));

        assert_eq!(data.perps.longs_notional, dec!(100000));
        assert_eq!(data.perps.shorts_notional, Decimal::ZERO);
        assert_eq!(data.perps.gross_notional, dec!(100000));
        assert_eq!(data.perps.margin, dec!(10000));
        assert_eq!(data.perps.estimated_margin_used, dec!(20000));

        assert_eq!(data.perps.trades.len(), 1);
        assert_eq!(data.perps.trades[0].side, PerpSide::Long);
        assert_eq!(data.perps.trades[0].notional, dec!(100000));

        // The margin is the only owned asset in the tree.
        assert_eq!(data.categories.len(), 1);
        assert_eq!(data.categories[0].key, "crypto");
        assert_eq!(data.categories[0].gross_value, dec!(10000));
        assert_eq!(data.categories[0].children.len(), 1);
        assert_eq!(data.categories[0].children[0].key, "crypto:stablecoins");
    }

    #[test]
    fn test_short_perp_counts_toward_short_exposure() {
        let assets = vec![
            margin("USDC", dec!(5000)),
            perp("ETH", "ETH Short (Hyperliquid)", dec!(20000)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.exposure.short_exposure, dec!(20000));
        assert_eq!(data.exposure.net_exposure, dec!(-20000));
        assert_eq!(data.exposure.gross_exposure, dec!(20000));
        assert_eq!(data.exposure.leverage, dec!(4));
        assert_eq!(data.perps.trades[0].side, PerpSide::Short);
    }

    #[test]
    fn test_category_tree_totals_and_order() {
        let assets = vec![
            spot("AAPL", MainCategory::Equities, SubCategory::Stocks, dec!(10000)),
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(60000)),
            spot("ETH", MainCategory::Crypto, SubCategory::Eth, dec!(30000)),
            spot("ETH", MainCategory::Crypto, SubCategory::Eth, dec!(-5000)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.categories.len(), 2);
        let crypto = &data.categories[0];
        assert_eq!(crypto.key, "crypto");
        assert_eq!(crypto.gross_value, dec!(90000));
        assert_eq!(crypto.debt_value, dec!(5000));
        assert_eq!(crypto.net_value, dec!(85000));
        assert_eq!(crypto.percentage, dec!(90));

        assert_eq!(crypto.children[0].key, "crypto:btc");
        assert_eq!(crypto.children[0].gross_value, dec!(60000));
        assert_eq!(crypto.children[1].key, "crypto:eth");
        assert_eq!(crypto.children[1].net_value, dec!(25000));

        let equities = &data.categories[1];
        assert_eq!(equities.key, "equities");
        assert_eq!(equities.gross_value, dec!(10000));
        assert_eq!(equities.percentage, dec!(10));
    }

    #[test]
    fn test_spot_vs_derivatives_split() {
        let assets = vec![
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(30000)),
            perp("ETH", "ETH Long (Hyperliquid)", dec!(10000)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.spot_vs_derivatives.spot_value, dec!(30000));
        assert_eq!(data.spot_vs_derivatives.derivatives_value, dec!(10000));
        assert_eq!(data.spot_vs_derivatives.spot_percentage, dec!(75));
        assert_eq!(data.spot_vs_derivatives.derivatives_percentage, dec!(25));
    }

    #[test]
    fn test_concentration_single_position() {
        let assets = vec![spot(
            "BTC",
            MainCategory::Crypto,
            SubCategory::Btc,
            dec!(100000),
        )];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.concentration.hhi, dec!(10000));
        assert_eq!(data.concentration.top1_percentage, dec!(100));
        assert_eq!(data.concentration.position_count, 1);
    }

    #[test]
    fn test_concentration_equal_split() {
        let assets = vec![
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(2500)),
            spot("ETH", MainCategory::Crypto, SubCategory::Eth, dec!(2500)),
            spot("SOL", MainCategory::Crypto, SubCategory::Sol, dec!(2500)),
            spot("AAPL", MainCategory::Equities, SubCategory::Stocks, dec!(2500)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.concentration.hhi, dec!(2500));
        assert_eq!(data.concentration.top1_percentage, dec!(25));
        assert_eq!(data.concentration.top5_percentage, dec!(100));
        assert_eq!(data.concentration.position_count, 4);
    }

    #[test]
    fn test_concentration_merges_rows_by_symbol_and_skips_debt() {
        let assets = vec![
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(5000)),
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(5000)),
            spot("ETH", MainCategory::Crypto, SubCategory::Eth, dec!(10000)),
            spot("USDC", MainCategory::Crypto, SubCategory::Stablecoins, dec!(-3000)),
            perp("SOL", "SOL Long (Hyperliquid)", dec!(50000)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.concentration.position_count, 2);
        assert_eq!(data.concentration.hhi, dec!(5000));
        assert_eq!(data.concentration.top1_percentage, dec!(50));
    }

    #[test]
    fn test_assumed_leverage_override() {
        let aggregator =
            ExposureAggregator::new(CategoryService::new()).with_assumed_leverage(dec!(10));
        let assets = vec![perp("BTC", "BTC Long (Hyperliquid)", dec!(50000))];

        let data = aggregator.aggregate(&assets);

        assert_eq!(data.perps.estimated_margin_used, dec!(5000));
    }

    #[test]
    fn test_empty_input_yields_zeroed_output() {
        let data = aggregator().aggregate(&[]);

        assert_eq!(data.exposure.net_worth, Decimal::ZERO);
        assert_eq!(data.exposure.leverage, Decimal::ZERO);
        assert!(data.categories.is_empty());
        assert!(data.perps.trades.is_empty());
        assert_eq!(data.concentration.position_count, 0);
    }

    #[test]
    fn test_underwater_portfolio_has_zero_leverage() {
        let assets = vec![
            spot("BTC", MainCategory::Crypto, SubCategory::Btc, dec!(10000)),
            spot("ETH", MainCategory::Crypto, SubCategory::Eth, dec!(-15000)),
        ];

        let data = aggregator().aggregate(&assets);

        assert_eq!(data.exposure.net_worth, dec!(-5000));
        assert_eq!(
            data.exposure.leverage,
            Decimal::ZERO,
            "leverage is meaningless without positive equity"
        );
    }
}
