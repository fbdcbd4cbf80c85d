use rust_decimal::Decimal;

use crate::modules::pricing::models::RoomPackageLine;

/// Pricing category for GST purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GstCategory {
    Venue,
    Room,
    Menu,
}

/// GstCalculator applies category-specific GST rules to a base amount.
///
/// Venue rental and menu packages carry the standard 18% rate. Room
/// accommodation is rated per room line: 5% when the per-room rate is at or
/// under the concessional threshold, 18% above it. The threshold is never
/// evaluated on the aggregated room base; a package mixing cheap and
/// expensive categories is taxed line by line and summed.
pub struct GstCalculator;

impl GstCalculator {
    /// Per-room nightly rate at or below which the concessional rate applies
    /// (inclusive on the low side).
    pub fn room_rate_threshold() -> Decimal {
        Decimal::new(7500, 0)
    }

    /// Standard rate for venue rental and menu packages (18%).
    pub fn standard_rate() -> Decimal {
        Decimal::new(18, 2)
    }

    /// Concessional room rate (5%).
    pub fn concessional_rate() -> Decimal {
        Decimal::new(5, 2)
    }

    /// Rate for a single room line, decided by its per-room rate.
    pub fn room_line_rate(per_room_rate: Decimal) -> Decimal {
        if per_room_rate <= Self::room_rate_threshold() {
            Self::concessional_rate()
        } else {
            Self::standard_rate()
        }
    }

    /// GST for an amount in the given category. `room_rate` carries the
    /// per-room rate when the category is `Room` and must be supplied by the
    /// caller iterating room lines.
    pub fn gst(
        amount: Decimal,
        category: GstCategory,
        include_gst: bool,
        room_rate: Option<Decimal>,
    ) -> Decimal {
        if !include_gst {
            return Decimal::ZERO;
        }

        let rate = match category {
            GstCategory::Venue | GstCategory::Menu => Self::standard_rate(),
            // A room amount with no per-room rate supplied takes the
            // standard rate; only a known cheap rate earns the concession.
            GstCategory::Room => room_rate
                .map(Self::room_line_rate)
                .unwrap_or_else(Self::standard_rate),
        };

        amount * rate
    }

    /// GST on the venue rental base.
    pub fn venue_gst(base: Decimal, include_gst: bool) -> Decimal {
        Self::gst(base, GstCategory::Venue, include_gst, None)
    }

    /// GST on the menu base.
    pub fn menu_gst(base: Decimal, include_gst: bool) -> Decimal {
        Self::gst(base, GstCategory::Menu, include_gst, None)
    }

    /// GST across room lines, computed per line and summed.
    pub fn room_gst(lines: &[RoomPackageLine], include_gst: bool) -> Decimal {
        if !include_gst {
            return Decimal::ZERO;
        }

        lines
            .iter()
            .map(|line| {
                let sanitized = line.sanitize();
                sanitized.base_amount() * Self::room_line_rate(sanitized.rate)
            })
            .sum()
    }
}
