use rust_decimal::Decimal;

use crate::modules::pricing::models::{
    CategoryBases, MenuPackageSelection, QuotationLines, RoomPackageLine, VenueRentalLine,
};

/// LineAggregator computes the base subtotal for each pricing category.
///
/// All three functions are pure over sanitized lines; bases are never
/// negative and never NaN regardless of what the form sent.
pub struct LineAggregator;

impl LineAggregator {
    /// Venue rental base: Σ session_rate. The rate is a flat per-session
    /// charge with no guest-count multiplication.
    pub fn venue_base(lines: &[VenueRentalLine]) -> Decimal {
        lines.iter().map(VenueRentalLine::sanitized_rate).sum()
    }

    /// Room accommodation base: per line, rate × rooms plus the
    /// extra-occupant surcharge, summed across lines.
    pub fn room_base(lines: &[RoomPackageLine]) -> Decimal {
        lines.iter().map(|line| line.sanitize().base_amount()).sum()
    }

    /// Menu base: per selected package, the effective package price
    /// (custom override or catalog snapshot) plus à-la-carte additions.
    pub fn menu_base(selections: &[MenuPackageSelection]) -> Decimal {
        selections
            .iter()
            .map(|selection| {
                let sanitized = selection.sanitize();
                sanitized.package_price + sanitized.additional_items_total
            })
            .sum()
    }

    /// All three category bases at once.
    pub fn aggregate(lines: &QuotationLines) -> CategoryBases {
        CategoryBases {
            venue_base: Self::venue_base(&lines.venues),
            room_base: Self::room_base(&lines.rooms),
            menu_base: Self::menu_base(&lines.menus),
        }
    }
}
