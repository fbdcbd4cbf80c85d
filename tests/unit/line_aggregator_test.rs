// Property-based tests for the line aggregators
//
// The aggregators are the leaves of the pricing pipeline: venue rental,
// room accommodation (with extra-occupant surcharge) and menu packages.
// Uses proptest to validate calculation properties across many inputs.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banquetdesk::pricing::models::{
    MenuItemSelection, MenuPackageSelection, RoomPackageLine, VenueRentalLine,
};
use banquetdesk::pricing::services::LineAggregator;

fn venue_line(rate: u64) -> VenueRentalLine {
    VenueRentalLine {
        session_rate: Decimal::from(rate),
        ..Default::default()
    }
}

fn room_line(rate: u64, rooms: u32, default_occ: u32, total_occ: u32, extra_rate: u64) -> RoomPackageLine {
    RoomPackageLine {
        category: "Deluxe".to_string(),
        rate: Decimal::from(rate),
        number_of_rooms: Some(rooms),
        default_occupancy: Some(default_occ),
        total_occupancy: Some(total_occ),
        max_occupancy: None,
        extra_person_rate: Decimal::from(extra_rate),
    }
}

proptest! {
    #[test]
    fn venue_base_is_sum_of_session_rates(rates in prop::collection::vec(0u64..10_000_000u64, 0..8)) {
        let lines: Vec<VenueRentalLine> = rates.iter().map(|r| venue_line(*r)).collect();
        let expected: Decimal = rates.iter().map(|r| Decimal::from(*r)).sum();

        prop_assert_eq!(LineAggregator::venue_base(&lines), expected);
    }

    #[test]
    fn room_base_is_never_negative(
        rate in 0u64..1_000_000u64,
        rooms in 1u32..20u32,
        default_occ in 1u32..4u32,
        total_occ in 0u32..100u32,
        extra_rate in 0u64..10_000u64
    ) {
        let lines = vec![room_line(rate, rooms, default_occ, total_occ, extra_rate)];

        prop_assert!(LineAggregator::room_base(&lines) >= Decimal::ZERO);
    }

    #[test]
    fn room_surcharge_only_counts_occupants_over_the_included_count(
        rate in 1u64..100_000u64,
        rooms in 1u32..10u32,
        extra in 0u32..10u32
    ) {
        let default_occ = 2u32;
        let included = default_occ * rooms;
        let lines = vec![room_line(rate, rooms, default_occ, included + extra, 800)];

        let expected = Decimal::from(rate) * Decimal::from(rooms)
            + Decimal::from(extra) * dec!(800);

        prop_assert_eq!(LineAggregator::room_base(&lines), expected);
    }

    #[test]
    fn menu_base_ignores_package_item_prices(
        package_price in 0u64..1_000_000u64,
        item_price in 0u64..100_000u64,
        quantity in 0u32..50u32
    ) {
        // A package-included item contributes nothing regardless of its
        // own price and quantity.
        let selection = MenuPackageSelection {
            package_id: "pkg".to_string(),
            package_price: Decimal::from(package_price),
            selected_items: vec![MenuItemSelection {
                name: "Included dish".to_string(),
                is_package_item: true,
                additional_price: Decimal::from(item_price),
                quantity: Some(quantity),
                ..Default::default()
            }],
            ..Default::default()
        };

        prop_assert_eq!(
            LineAggregator::menu_base(&[selection]),
            Decimal::from(package_price)
        );
    }
}

#[test]
fn test_room_base_worked_example() {
    // 5000 × 2 rooms + 1 extra occupant × 800
    let lines = vec![room_line(5000, 2, 2, 5, 800)];

    assert_eq!(LineAggregator::room_base(&lines), dec!(10800));
}

#[test]
fn test_menu_base_worked_example() {
    let selection = MenuPackageSelection {
        package_id: "pkg".to_string(),
        package_price: dec!(20000),
        selected_items: vec![MenuItemSelection {
            name: "Jumbo Prawns".to_string(),
            is_package_item: false,
            additional_price: dec!(500),
            quantity: Some(3),
            ..Default::default()
        }],
        ..Default::default()
    };

    assert_eq!(LineAggregator::menu_base(&[selection]), dec!(21500));
}

#[test]
fn test_custom_package_price_overrides_catalog_snapshot() {
    let selection = MenuPackageSelection {
        package_id: "pkg".to_string(),
        package_price: dec!(20000),
        custom_package_price: Some(dec!(17500)),
        ..Default::default()
    };

    assert_eq!(LineAggregator::menu_base(&[selection]), dec!(17500));
}

#[test]
fn test_malformed_line_input_coerces_to_zero_base() {
    let lines: Vec<VenueRentalLine> = serde_json::from_str(
        r#"[{"venue": "Lawn", "sessionRate": "TBD"}, {"venue": "Hall", "sessionRate": null}]"#,
    )
    .unwrap();

    assert_eq!(LineAggregator::venue_base(&lines), Decimal::ZERO);
}
