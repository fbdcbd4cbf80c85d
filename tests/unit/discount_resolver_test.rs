// Property-based tests for the discount resolver
//
// The ceiling verdict never blocks application; fixed discounts are capped
// at the base so the net can never go negative.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banquetdesk::pricing::models::DiscountType;
use banquetdesk::pricing::services::DiscountResolver;

proptest! {
    #[test]
    fn percentage_amount_is_value_percent_of_base(
        base in 0u64..1_000_000_000u64,
        value in 1u8..=100u8
    ) {
        let base = Decimal::from(base);
        let value = Decimal::from(value);

        let resolution =
            DiscountResolver::resolve(DiscountType::Percentage, value, base, dec!(10));

        prop_assert_eq!(resolution.amount, base * value / dec!(100));
    }

    #[test]
    fn fixed_amount_never_exceeds_base(
        base in 0u64..1_000_000u64,
        value in 1u64..10_000_000u64
    ) {
        let base = Decimal::from(base);

        let resolution =
            DiscountResolver::resolve(DiscountType::Fixed, Decimal::from(value), base, dec!(10));

        prop_assert!(resolution.amount <= base);
        prop_assert!(resolution.amount >= Decimal::ZERO);
    }

    #[test]
    fn ceiling_breach_never_zeroes_the_amount(
        base in 1u64..1_000_000u64,
        value in 11u8..=100u8
    ) {
        // Over a 10% ceiling the flag must be set and the amount still
        // computed; the flag triggers notification, it never blocks.
        let base = Decimal::from(base);

        let resolution = DiscountResolver::resolve(
            DiscountType::Percentage,
            Decimal::from(value),
            base,
            dec!(10),
        );

        prop_assert!(resolution.exceeds_limit);
        prop_assert!(resolution.amount > Decimal::ZERO);
    }

    #[test]
    fn percentage_verdict_matches_ceiling_comparison(
        value in 1u8..=100u8,
        ceiling in 1u8..=100u8
    ) {
        let resolution = DiscountResolver::resolve(
            DiscountType::Percentage,
            Decimal::from(value),
            dec!(100000),
            Decimal::from(ceiling),
        );

        prop_assert_eq!(resolution.exceeds_limit, value > ceiling);
    }
}

#[test]
fn test_worked_example_fifteen_over_ten() {
    let resolution =
        DiscountResolver::resolve(DiscountType::Percentage, dec!(15), dec!(20000), dec!(10));

    assert!(resolution.exceeds_limit);
    assert_eq!(resolution.amount, dec!(3000));
}

#[test]
fn test_local_fixed_verdict_defers_to_server() {
    let local = DiscountResolver::resolve(DiscountType::Fixed, dec!(5000), dec!(20000), dec!(10));
    assert!(!local.exceeds_limit);

    let server = DiscountResolver::resolve_authoritative(
        DiscountType::Fixed,
        dec!(5000),
        dec!(20000),
        dec!(10),
    );
    // 5000 is over 10% of 20000; only the authoritative path says so
    assert!(server.exceeds_limit);
    assert_eq!(server.amount, local.amount);
}

#[test]
fn test_validate_rejects_non_positive_values() {
    assert!(DiscountResolver::validate_value(Decimal::ZERO).is_err());
    assert!(DiscountResolver::validate_value(dec!(-10)).is_err());
    assert!(DiscountResolver::validate_value(dec!(1)).is_ok());
}
