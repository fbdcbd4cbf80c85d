use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::ceil_rupees;
use crate::modules::pricing::models::{
    CategoryBreakdown, DiscountResolution, DiscountSpec, QuotationLines, QuoteBreakdown,
};
use crate::modules::pricing::services::{DiscountResolver, GstCalculator, LineAggregator};

/// Result of one recomputation pass over a quotation
#[derive(Debug, Clone, Copy)]
pub struct Recalculation {
    pub breakdown: QuoteBreakdown,
    pub resolution: DiscountResolution,
}

/// QuotationTotalizer is the recompute pipeline behind every edit.
///
/// Stage order is a contract, not an implementation detail:
/// 1. category bases
/// 2. per-category GST on the undiscounted bases
/// 3. GST-inclusive subtotal
/// 4. discount resolved against the GST-inclusive subtotal; resolving it
///    pre-tax changes the payable figure and is a defect
/// 5. discount allocated back across categories in proportion to their
///    GST-inclusive subtotals, for display only
/// 6. payable total = ceil(subtotal − discount)
///
/// The pipeline is synchronous and holds no state; recomputing twice on the
/// same inputs yields the same outputs.
pub struct QuotationTotalizer;

struct StageTotals {
    venue: CategoryStage,
    room: CategoryStage,
    menu: CategoryStage,
    total_with_gst: Decimal,
}

struct CategoryStage {
    base: Decimal,
    gst: Decimal,
    total_with_gst: Decimal,
}

impl QuotationTotalizer {
    /// Live-edit path: resolve the requested discount against the freshly
    /// computed GST-inclusive subtotal, then build the breakdown.
    ///
    /// The caller must have validated `discount_value > 0` already; the
    /// resolution returned here is provisional until the server-side check
    /// confirms or overrides it.
    pub fn compute(
        lines: &QuotationLines,
        include_gst: bool,
        discount: Option<&DiscountSpec>,
        ceiling_percent: Decimal,
    ) -> Recalculation {
        let stage = Self::stage_totals(lines, include_gst);

        let resolution = match discount {
            Some(spec) => DiscountResolver::resolve(
                spec.discount_type,
                spec.discount_value,
                stage.total_with_gst,
                ceiling_percent,
            ),
            None => DiscountResolution::none(),
        };

        debug!(
            total_with_gst = %stage.total_with_gst,
            discount = %resolution.amount,
            "quotation recomputed"
        );

        Recalculation {
            breakdown: Self::finish(stage, resolution.amount),
            resolution,
        }
    }

    /// Stored-record path: the persisted discount amount is trusted
    /// verbatim (no re-resolution, no ceiling check), only bases and GST are
    /// recomputed and the discount redistributed.
    pub fn compute_with_stored_discount(
        lines: &QuotationLines,
        include_gst: bool,
        discount_amount: Decimal,
    ) -> QuoteBreakdown {
        let stage = Self::stage_totals(lines, include_gst);
        Self::finish(stage, discount_amount.max(Decimal::ZERO))
    }

    fn stage_totals(lines: &QuotationLines, include_gst: bool) -> StageTotals {
        let bases = LineAggregator::aggregate(lines);

        let venue = CategoryStage::new(
            bases.venue_base,
            GstCalculator::venue_gst(bases.venue_base, include_gst),
        );
        let room = CategoryStage::new(
            bases.room_base,
            GstCalculator::room_gst(&lines.rooms, include_gst),
        );
        let menu = CategoryStage::new(
            bases.menu_base,
            GstCalculator::menu_gst(bases.menu_base, include_gst),
        );

        let total_with_gst = venue.total_with_gst + room.total_with_gst + menu.total_with_gst;

        StageTotals {
            venue,
            room,
            menu,
            total_with_gst,
        }
    }

    fn finish(stage: StageTotals, discount_amount: Decimal) -> QuoteBreakdown {
        // Display allocation: proportional to GST-inclusive subtotals, with
        // the menu share taken as the remainder so the three shares sum to
        // the discount exactly before rounding. The allocation never moves
        // the payable total.
        let (venue_share, room_share, menu_share) =
            if stage.total_with_gst > Decimal::ZERO && discount_amount > Decimal::ZERO {
                let venue_share =
                    discount_amount * stage.venue.total_with_gst / stage.total_with_gst;
                let room_share = discount_amount * stage.room.total_with_gst / stage.total_with_gst;
                (
                    venue_share,
                    room_share,
                    discount_amount - venue_share - room_share,
                )
            } else {
                (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
            };

        QuoteBreakdown {
            venue: stage.venue.into_breakdown(venue_share),
            room: stage.room.into_breakdown(room_share),
            menu: stage.menu.into_breakdown(menu_share),
            total_with_gst: stage.total_with_gst,
            discount_amount,
            banquet_total: ceil_rupees(stage.total_with_gst),
            grand_total: ceil_rupees(stage.total_with_gst - discount_amount),
            final_total: ceil_rupees(stage.total_with_gst - discount_amount),
        }
    }
}

impl CategoryStage {
    fn new(base: Decimal, gst: Decimal) -> Self {
        Self {
            base,
            gst,
            total_with_gst: base + gst,
        }
    }

    fn into_breakdown(self, discount_share: Decimal) -> CategoryBreakdown {
        CategoryBreakdown {
            base: self.base,
            gst: self.gst,
            total_with_gst: self.total_with_gst,
            discount_share,
        }
    }
}
