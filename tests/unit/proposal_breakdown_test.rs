// Round-trip tests for the proposal renderer
//
// The renderer must reproduce the live pipeline's figures from a persisted
// record: same bases, same GST, stored discount trusted verbatim. Catalog
// drift between the persisted aggregates and the recomputed figures is
// expected and the line data must win.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banquetdesk::pricing::models::{
    MenuPackageSelection, QuotationLines, RoomPackageLine, VenueRentalLine,
};
use banquetdesk::pricing::services::{LineAggregator, QuotationTotalizer};
use banquetdesk::proposals::services::ProposalRenderer;
use banquetdesk::quotations::models::{Quotation, QuotationStatus};

fn persisted(lines: QuotationLines, discount_amount: Decimal) -> Quotation {
    Quotation {
        id: Some("q-render".to_string()),
        client_name: "Iyer Sangeet".to_string(),
        client_contact: None,
        event_date: None,
        lines,
        include_gst: true,
        discount_type: None,
        discount_value: Decimal::ZERO,
        discount_amount,
        discount_reason: None,
        discount_exceeds_limit: false,
        venue_rental_total: Decimal::ZERO,
        room_total: Decimal::ZERO,
        menu_total: Decimal::ZERO,
        banquet_total: Decimal::ZERO,
        grand_total: Decimal::ZERO,
        final_total: Decimal::ZERO,
        status: QuotationStatus::Submitted,
        created_at: None,
        updated_at: None,
    }
}

fn sample_lines(venue_rate: u64, room_rate: u64, menu_price: u64) -> QuotationLines {
    QuotationLines {
        venues: vec![VenueRentalLine {
            session_rate: Decimal::from(venue_rate),
            ..Default::default()
        }],
        rooms: vec![RoomPackageLine {
            rate: Decimal::from(room_rate),
            number_of_rooms: Some(2),
            default_occupancy: Some(2),
            total_occupancy: Some(6),
            max_occupancy: Some(3),
            extra_person_rate: dec!(750),
            ..Default::default()
        }],
        menus: vec![MenuPackageSelection {
            package_id: "pkg".to_string(),
            package_price: Decimal::from(menu_price),
            ..Default::default()
        }],
    }
}

proptest! {
    #[test]
    fn renderer_bases_match_aggregator_output_bit_for_bit(
        venue_rate in 0u64..1_000_000u64,
        room_rate in 0u64..100_000u64,
        menu_price in 0u64..1_000_000u64
    ) {
        let lines = sample_lines(venue_rate, room_rate, menu_price);
        let bases = LineAggregator::aggregate(&lines);

        let quotation = persisted(lines, Decimal::ZERO);
        let breakdown = ProposalRenderer::breakdown_from_record(&quotation);

        prop_assert_eq!(breakdown.venue.base, bases.venue_base);
        prop_assert_eq!(breakdown.room.base, bases.room_base);
        prop_assert_eq!(breakdown.menu.base, bases.menu_base);
    }

    #[test]
    fn renderer_matches_live_pipeline_for_stored_discount(
        venue_rate in 1u64..1_000_000u64,
        discount in 0u64..10_000u64
    ) {
        let lines = sample_lines(venue_rate, 5000, 20000);
        let discount = Decimal::from(discount);

        let live = QuotationTotalizer::compute_with_stored_discount(&lines, true, discount);
        let rendered =
            ProposalRenderer::breakdown_from_record(&persisted(lines, discount));

        prop_assert_eq!(live, rendered);
    }

    #[test]
    fn stored_discount_redistributed_exactly(
        venue_rate in 1u64..1_000_000u64,
        discount in 1u64..10_000u64
    ) {
        let discount = Decimal::from(discount);
        let quotation = persisted(sample_lines(venue_rate, 5000, 20000), discount);

        let breakdown = ProposalRenderer::breakdown_from_record(&quotation);

        let share_sum = breakdown.venue.discount_share
            + breakdown.room.discount_share
            + breakdown.menu.discount_share;
        prop_assert_eq!(share_sum, discount);
    }
}

#[test]
fn test_catalog_drift_does_not_fail_the_render() {
    // Persisted aggregates disagree with the line data; the render must
    // succeed and the line-derived figures must carry the document.
    let mut quotation = persisted(sample_lines(50000, 5000, 20000), Decimal::ZERO);
    quotation.venue_rental_total = dec!(123456);
    quotation.grand_total = dec!(1);

    let breakdown = ProposalRenderer::breakdown_from_record(&quotation);

    assert_eq!(breakdown.venue.base, dec!(50000));
    assert_eq!(breakdown.venue.gst, dec!(9000.00));
    assert_ne!(breakdown.grand_total, dec!(1));
}

#[test]
fn test_aggregate_fallback_carries_persisted_totals() {
    let mut quotation = persisted(QuotationLines::default(), dec!(1134));
    quotation.venue_rental_total = dec!(0);
    quotation.room_total = dec!(11340);
    quotation.menu_total = dec!(0);
    quotation.banquet_total = dec!(11340);
    quotation.grand_total = dec!(10206);
    quotation.final_total = dec!(10206);

    let breakdown = ProposalRenderer::breakdown_from_record(&quotation);

    assert_eq!(breakdown.room.total_with_gst, dec!(11340));
    assert_eq!(breakdown.final_total, dec!(10206));
    // The stored discount still redistributes across the aggregate totals
    assert_eq!(breakdown.room.discount_share, dec!(1134));
}
