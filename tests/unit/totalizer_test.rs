// Property-based tests for the quotation totalizer
//
// Covers the pipeline's contractual properties: idempotence, monotonicity
// of the payable total in any line rate, discount-after-tax ordering, and
// exact proportional allocation of the discount across categories.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banquetdesk::pricing::models::{
    DiscountSpec, DiscountType, MenuItemSelection, MenuPackageSelection, QuotationLines,
    RoomPackageLine, VenueRentalLine,
};
use banquetdesk::pricing::services::QuotationTotalizer;

fn lines(venue_rate: u64, room_rate: u64, menu_price: u64) -> QuotationLines {
    QuotationLines {
        venues: vec![VenueRentalLine {
            session_rate: Decimal::from(venue_rate),
            ..Default::default()
        }],
        rooms: vec![RoomPackageLine {
            rate: Decimal::from(room_rate),
            number_of_rooms: Some(2),
            default_occupancy: Some(2),
            total_occupancy: Some(5),
            extra_person_rate: dec!(800),
            ..Default::default()
        }],
        menus: vec![MenuPackageSelection {
            package_id: "pkg".to_string(),
            package_price: Decimal::from(menu_price),
            selected_items: vec![MenuItemSelection {
                name: "Live Counter".to_string(),
                is_package_item: false,
                additional_price: dec!(500),
                quantity: Some(2),
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

proptest! {
    #[test]
    fn recomputation_is_idempotent(
        venue_rate in 0u64..1_000_000u64,
        room_rate in 0u64..100_000u64,
        menu_price in 0u64..1_000_000u64,
        include_gst in any::<bool>()
    ) {
        let input = lines(venue_rate, room_rate, menu_price);
        let spec = DiscountSpec::new(DiscountType::Percentage, dec!(7));

        let first = QuotationTotalizer::compute(&input, include_gst, Some(&spec), dec!(10));
        let second = QuotationTotalizer::compute(&input, include_gst, Some(&spec), dec!(10));

        prop_assert_eq!(first.breakdown, second.breakdown);
        prop_assert_eq!(first.resolution, second.resolution);
    }

    #[test]
    fn raising_a_rate_never_lowers_the_grand_total(
        venue_rate in 0u64..1_000_000u64,
        bump in 1u64..100_000u64,
        include_gst in any::<bool>()
    ) {
        let before = QuotationTotalizer::compute(
            &lines(venue_rate, 5000, 20000), include_gst, None, dec!(10));
        let after = QuotationTotalizer::compute(
            &lines(venue_rate + bump, 5000, 20000), include_gst, None, dec!(10));

        prop_assert!(after.breakdown.grand_total >= before.breakdown.grand_total);
    }

    #[test]
    fn fixed_discount_never_drives_the_total_negative(
        venue_rate in 0u64..100_000u64,
        discount in 1u64..10_000_000u64
    ) {
        let spec = DiscountSpec::new(DiscountType::Fixed, Decimal::from(discount));
        let result = QuotationTotalizer::compute(
            &lines(venue_rate, 5000, 20000), true, Some(&spec), dec!(10));

        prop_assert!(result.resolution.amount <= result.breakdown.total_with_gst);
        prop_assert!(result.breakdown.grand_total >= Decimal::ZERO);
    }

    #[test]
    fn discount_shares_sum_exactly_before_rounding(
        venue_rate in 1u64..1_000_000u64,
        room_rate in 1u64..100_000u64,
        menu_price in 1u64..1_000_000u64,
        value in 1u8..=30u8
    ) {
        let spec = DiscountSpec::new(DiscountType::Percentage, Decimal::from(value));
        let result = QuotationTotalizer::compute(
            &lines(venue_rate, room_rate, menu_price), true, Some(&spec), dec!(10));
        let breakdown = result.breakdown;

        let share_sum = breakdown.venue.discount_share
            + breakdown.room.discount_share
            + breakdown.menu.discount_share;
        prop_assert_eq!(share_sum, breakdown.discount_amount);

        // Rounded shares stay within one rupee of their exact values
        prop_assert!(breakdown.venue.rounded_discount_share() - breakdown.venue.discount_share < Decimal::ONE);
        prop_assert!(breakdown.room.rounded_discount_share() - breakdown.room.discount_share < Decimal::ONE);
        prop_assert!(breakdown.menu.rounded_discount_share() - breakdown.menu.discount_share < Decimal::ONE);
    }

    #[test]
    fn allocation_never_moves_the_payable_total(
        venue_rate in 1u64..1_000_000u64,
        value in 1u8..=50u8
    ) {
        let spec = DiscountSpec::new(DiscountType::Percentage, Decimal::from(value));
        let result = QuotationTotalizer::compute(
            &lines(venue_rate, 5000, 20000), true, Some(&spec), dec!(10));
        let breakdown = result.breakdown;

        let expected =
            (breakdown.total_with_gst - breakdown.discount_amount).ceil();
        prop_assert_eq!(breakdown.grand_total, expected);
        prop_assert_eq!(breakdown.final_total, breakdown.grand_total);
    }
}

#[test]
fn test_worked_example_venue_only() {
    let input = QuotationLines {
        venues: vec![VenueRentalLine {
            session_rate: dec!(50000),
            ..Default::default()
        }],
        ..Default::default()
    };

    let result = QuotationTotalizer::compute(&input, true, None, dec!(10));

    assert_eq!(result.breakdown.venue.gst, dec!(9000.00));
    assert_eq!(result.breakdown.grand_total, dec!(59000));
}

#[test]
fn test_worked_example_room_package_with_discount() {
    let input = QuotationLines {
        rooms: vec![RoomPackageLine {
            rate: dec!(5000),
            number_of_rooms: Some(2),
            default_occupancy: Some(2),
            total_occupancy: Some(5),
            extra_person_rate: dec!(800),
            ..Default::default()
        }],
        ..Default::default()
    };

    let no_discount = QuotationTotalizer::compute(&input, true, None, dec!(10));
    assert_eq!(no_discount.breakdown.room.base, dec!(10800));
    assert_eq!(no_discount.breakdown.room.gst, dec!(540.00));
    assert_eq!(no_discount.breakdown.grand_total, dec!(11340));

    let spec = DiscountSpec::new(DiscountType::Percentage, dec!(10));
    let discounted = QuotationTotalizer::compute(&input, true, Some(&spec), dec!(10));
    assert_eq!(discounted.resolution.amount, dec!(1134));
    assert_eq!(discounted.breakdown.grand_total, dec!(10206));
}

#[test]
fn test_discount_is_resolved_after_tax_not_before() {
    // 10% off 11340 (post-GST) = 1134 → 10206. Resolving pre-tax would
    // give 10% off 10800 = 1080 → ceil(11340 − 1080) = 10260.
    let input = QuotationLines {
        rooms: vec![RoomPackageLine {
            rate: dec!(5000),
            number_of_rooms: Some(2),
            default_occupancy: Some(2),
            total_occupancy: Some(5),
            extra_person_rate: dec!(800),
            ..Default::default()
        }],
        ..Default::default()
    };
    let spec = DiscountSpec::new(DiscountType::Percentage, dec!(10));

    let result = QuotationTotalizer::compute(&input, true, Some(&spec), dec!(10));

    assert_eq!(result.breakdown.grand_total, dec!(10206));
    assert_ne!(result.breakdown.grand_total, dec!(10260));
}

#[test]
fn test_gst_excluded_drops_all_tax() {
    let result = QuotationTotalizer::compute(&lines(50000, 5000, 20000), false, None, dec!(10));
    let breakdown = result.breakdown;

    assert_eq!(breakdown.venue.gst, Decimal::ZERO);
    assert_eq!(breakdown.room.gst, Decimal::ZERO);
    assert_eq!(breakdown.menu.gst, Decimal::ZERO);
    assert_eq!(
        breakdown.total_with_gst,
        breakdown.venue.base + breakdown.room.base + breakdown.menu.base
    );
}
