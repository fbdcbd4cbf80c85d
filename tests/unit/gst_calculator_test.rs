// Property-based tests for the GST calculator
//
// Venue rental and menus carry flat 18%; room accommodation is rated per
// line at 5% or 18% depending on the per-room rate, threshold inclusive on
// the low side.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banquetdesk::pricing::models::RoomPackageLine;
use banquetdesk::pricing::services::GstCalculator;

fn room_line(rate: Decimal, rooms: u32) -> RoomPackageLine {
    RoomPackageLine {
        rate,
        number_of_rooms: Some(rooms),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn gst_is_deterministic(base in 0u64..1_000_000_000u64) {
        let base = Decimal::from(base);

        prop_assert_eq!(
            GstCalculator::venue_gst(base, true),
            GstCalculator::venue_gst(base, true)
        );
    }

    #[test]
    fn gst_disabled_is_always_zero(base in 0u64..1_000_000_000u64, rate in 0u64..100_000u64) {
        let base = Decimal::from(base);
        let lines = vec![room_line(Decimal::from(rate), 1)];

        prop_assert_eq!(GstCalculator::venue_gst(base, false), Decimal::ZERO);
        prop_assert_eq!(GstCalculator::menu_gst(base, false), Decimal::ZERO);
        prop_assert_eq!(GstCalculator::room_gst(&lines, false), Decimal::ZERO);
    }

    #[test]
    fn room_gst_rate_follows_the_per_room_threshold(rate in 1u64..100_000u64) {
        let rate = Decimal::from(rate);
        let lines = vec![room_line(rate, 1)];
        let gst = GstCalculator::room_gst(&lines, true);

        let expected_rate = if rate <= dec!(7500) { dec!(0.05) } else { dec!(0.18) };
        prop_assert_eq!(gst, rate * expected_rate);
    }

    #[test]
    fn venue_and_menu_gst_is_flat_18_percent(base in 0u64..1_000_000_000u64) {
        let base = Decimal::from(base);

        prop_assert_eq!(GstCalculator::venue_gst(base, true), base * dec!(0.18));
        prop_assert_eq!(GstCalculator::menu_gst(base, true), base * dec!(0.18));
    }
}

#[test]
fn test_threshold_boundary_inclusive_low_side() {
    assert_eq!(GstCalculator::room_line_rate(dec!(7500)), dec!(0.05));
    assert_eq!(GstCalculator::room_line_rate(dec!(7501)), dec!(0.18));
}

#[test]
fn test_mixed_room_package_rated_line_by_line() {
    // A cheap and an expensive category in one package: GST must be the
    // per-line sum, not a single rate applied to the aggregated base.
    let lines = vec![
        room_line(dec!(5000), 2),  // 10000 at 5%  = 500
        room_line(dec!(9000), 1),  // 9000 at 18%  = 1620
    ];

    let gst = GstCalculator::room_gst(&lines, true);
    assert_eq!(gst, dec!(2120.00));

    // Neither single-rate reading agrees
    let base = dec!(19000);
    assert_ne!(gst, base * dec!(0.05));
    assert_ne!(gst, base * dec!(0.18));
}

#[test]
fn test_worked_example_room_package() {
    // 5000 × 2 rooms + 1 extra × 800 = 10800, all at 5%
    let line = RoomPackageLine {
        rate: dec!(5000),
        number_of_rooms: Some(2),
        default_occupancy: Some(2),
        total_occupancy: Some(5),
        extra_person_rate: dec!(800),
        ..Default::default()
    };

    assert_eq!(GstCalculator::room_gst(&[line], true), dec!(540.00));
}
