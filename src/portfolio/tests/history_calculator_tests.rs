#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::fx::ExchangeRates;
    use crate::market_data::PriceQuote;
    use crate::portfolio::history::reconstruct_monthly_values_as_of;
    use crate::transactions::{Transaction, TransactionType};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::str::FromStr;

    // --- Helper Functions ---

    fn instant(date_str: &str) -> DateTime<Utc> {
        let naive = NaiveDate::from_str(date_str)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    fn date(date_str: &str) -> NaiveDate {
        NaiveDate::from_str(date_str).unwrap()
    }

    fn transaction(
        transaction_type: TransactionType,
        asset: &str,
        date_str: &str,
        amount: Decimal,
        price_try: Decimal,
        usd_rate: Decimal,
    ) -> Transaction {
        Transaction {
            id: "tx_1".to_string(),
            transaction_type,
            asset: asset.to_string(),
            date: instant(date_str),
            amount,
            price_try,
            usd_rate,
        }
    }

    fn buy(
        asset: &str,
        date_str: &str,
        amount: Decimal,
        price_try: Decimal,
        usd_rate: Decimal,
    ) -> Transaction {
        transaction(TransactionType::Buy, asset, date_str, amount, price_try, usd_rate)
    }

    fn sell(
        asset: &str,
        date_str: &str,
        amount: Decimal,
        price_try: Decimal,
        usd_rate: Decimal,
    ) -> Transaction {
        transaction(TransactionType::Sell, asset, date_str, amount, price_try, usd_rate)
    }

    fn rates() -> ExchangeRates {
        ExchangeRates {
            usd_try: dec!(33),
            eur_usd: dec!(1.08),
            gbp_usd: dec!(1.27),
        }
    }

    fn gold_quote(price: Decimal) -> HashMap<String, PriceQuote> {
        HashMap::from([("GOLD".to_string(), PriceQuote::usd(price))])
    }

    // --- Tests ---

    #[test]
    fn single_buy_covers_every_month_through_now() {
        // Bought at 80 USD/unit; valued live at 100 in the current month.
        let transactions = vec![buy("GOLD", "2024-03-15", dec!(10), dec!(2400), dec!(30))];
        let points = reconstruct_monthly_values_as_of(
            &transactions,
            &gold_quote(dec!(100)),
            &rates(),
            date("2024-01-01"),
            date("2024-12-31"),
            instant("2024-07-10"),
        )
        .unwrap();

        let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["2024-03", "2024-04", "2024-05", "2024-06", "2024-07"]
        );

        for point in &points[..4] {
            assert_eq!(point.value_usd, dec!(800));
            assert_eq!(point.value_try, dec!(24000));
        }
        let live = points.last().unwrap();
        assert_eq!(live.value_usd, dec!(1000));
        assert_eq!(live.value_try, dec!(33000));
    }

    #[test]
    fn window_restricts_emitted_months() {
        let transactions = vec![buy("GOLD", "2024-03-15", dec!(10), dec!(2400), dec!(30))];
        let points = reconstruct_monthly_values_as_of(
            &transactions,
            &gold_quote(dec!(100)),
            &rates(),
            date("2024-05-01"),
            date("2024-06-30"),
            instant("2024-07-10"),
        )
        .unwrap();

        let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2024-05", "2024-06"]);
        assert_eq!(points[0].value_usd, dec!(800));
    }

    #[test]
    fn sell_floors_replay_holdings_at_zero() {
        let transactions = vec![
            buy("GOLD", "2024-01-15", dec!(5), dec!(2400), dec!(30)),
            sell("GOLD", "2024-02-15", dec!(10), dec!(2400), dec!(30)),
        ];
        let points = reconstruct_monthly_values_as_of(
            &transactions,
            &gold_quote(dec!(100)),
            &rates(),
            date("2024-01-01"),
            date("2024-12-31"),
            instant("2024-04-10"),
        )
        .unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0].value_usd, dec!(400));
        for point in &points[1..] {
            assert_eq!(point.value_usd, Decimal::ZERO);
            assert_eq!(point.value_try, Decimal::ZERO);
        }
    }

    #[test]
    fn currency_holdings_follow_the_rule_table() {
        // 3000 TRY and 100 EUR: past months price TRY at the replayed rate
        // and EUR at its transaction-embedded USD price; the live month
        // switches both to the supplied rate snapshot.
        let transactions = vec![
            buy("TRY", "2024-01-05", dec!(3000), dec!(1), dec!(30)),
            buy("EUR", "2024-01-05", dec!(100), dec!(32), dec!(30)),
        ];
        let points = reconstruct_monthly_values_as_of(
            &transactions,
            &HashMap::new(),
            &rates(),
            date("2024-01-01"),
            date("2024-12-31"),
            instant("2024-03-10"),
        )
        .unwrap();

        assert_eq!(points.len(), 3);

        let historical = dec!(3000) * (Decimal::ONE / dec!(30)) + dec!(100) * (dec!(32) / dec!(30));
        assert_eq!(points[0].value_usd, historical);
        assert_eq!(points[1].value_usd, historical);
        assert_eq!(points[0].value_try, historical * dec!(30));

        let live = dec!(3000) * (Decimal::ONE / dec!(33)) + dec!(100) * dec!(1.08);
        assert_eq!(points[2].value_usd, live);
        assert_eq!(points[2].value_try, live * dec!(33));
    }

    #[test]
    fn usd_holdings_value_at_par() {
        let transactions = vec![buy("USD", "2024-01-05", dec!(50), dec!(30), dec!(30))];
        let points = reconstruct_monthly_values_as_of(
            &transactions,
            &HashMap::new(),
            &rates(),
            date("2024-01-01"),
            date("2024-12-31"),
            instant("2024-02-10"),
        )
        .unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value_usd, dec!(50));
        assert_eq!(points[0].value_try, dec!(1500));
        assert_eq!(points[1].value_usd, dec!(50));
        assert_eq!(points[1].value_try, dec!(1650));
    }

    #[test]
    fn last_known_price_and_rate_carry_forward() {
        let transactions = vec![
            buy("GOLD", "2024-01-10", dec!(10), dec!(2400), dec!(30)),
            buy("GOLD", "2024-03-10", dec!(5), dec!(2880), dec!(32)),
        ];
        let points = reconstruct_monthly_values_as_of(
            &transactions,
            &gold_quote(dec!(100)),
            &rates(),
            date("2024-01-01"),
            date("2024-12-31"),
            instant("2024-04-20"),
        )
        .unwrap();

        let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03", "2024-04"]);

        // January and February hold the first buy's 80 USD price and 30 rate.
        assert_eq!(points[0].value_usd, dec!(800));
        assert_eq!(points[1].value_usd, dec!(800));
        assert_eq!(points[1].value_try, dec!(24000));
        // March repriced by the second buy: 15 units at 90 USD, rate 32.
        assert_eq!(points[2].value_usd, dec!(1350));
        assert_eq!(points[2].value_try, dec!(43200));
        // April is the live month: 15 units at the quoted 100 USD.
        assert_eq!(points[3].value_usd, dec!(1500));
        assert_eq!(points[3].value_try, dec!(49500));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let transactions = vec![buy("GOLD", "2024-03-15", dec!(10), dec!(2400), dec!(30))];
        let result = reconstruct_monthly_values_as_of(
            &transactions,
            &gold_quote(dec!(100)),
            &rates(),
            date("2024-12-31"),
            date("2024-01-01"),
            instant("2024-07-10"),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn empty_log_produces_no_points() {
        let points = reconstruct_monthly_values_as_of(
            &[],
            &HashMap::new(),
            &rates(),
            date("2024-01-01"),
            date("2024-12-31"),
            instant("2024-07-10"),
        )
        .unwrap();
        assert!(points.is_empty());
    }
}
