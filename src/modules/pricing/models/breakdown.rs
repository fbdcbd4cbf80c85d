// Derived pricing projections.
//
// A breakdown is recomputed on every render from the line collections, the
// discount and the GST flag. It is never a source of truth; the persisted
// totals are a cache of `QuoteBreakdown::totals()`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::ceil_rupees;

/// Base subtotal per pricing category, before GST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBases {
    pub venue_base: Decimal,
    pub room_base: Decimal,
    pub menu_base: Decimal,
}

/// One category's slice of the quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Pre-tax subtotal
    pub base: Decimal,

    /// GST on the undiscounted base
    pub gst: Decimal,

    /// base + gst, exact
    pub total_with_gst: Decimal,

    /// This category's proportional share of the discount, exact
    pub discount_share: Decimal,
}

impl CategoryBreakdown {
    /// GST-inclusive subtotal as persisted (rounded up)
    pub fn rounded_total(&self) -> Decimal {
        ceil_rupees(self.total_with_gst)
    }

    /// Discount share as displayed (rounded up)
    pub fn rounded_discount_share(&self) -> Decimal {
        ceil_rupees(self.discount_share)
    }
}

/// Full derived breakdown for one quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub venue: CategoryBreakdown,
    pub room: CategoryBreakdown,
    pub menu: CategoryBreakdown,

    /// Σ (base + gst) across categories, exact
    pub total_with_gst: Decimal,

    /// Resolved discount applied to the GST-inclusive subtotal, exact
    pub discount_amount: Decimal,

    /// Pre-discount GST-inclusive figure, rounded up
    pub banquet_total: Decimal,

    /// Payable figure: ceil(total_with_gst − discount_amount)
    pub grand_total: Decimal,

    /// Equal to grand_total; persisted separately for post-hoc adjustments
    pub final_total: Decimal,
}

impl QuoteBreakdown {
    /// The six persisted totals, every one rounded up to whole rupees
    pub fn totals(&self) -> QuoteTotals {
        QuoteTotals {
            venue_rental_total: self.venue.rounded_total(),
            room_total: self.room.rounded_total(),
            menu_total: self.menu.rounded_total(),
            banquet_total: self.banquet_total,
            grand_total: self.grand_total,
            final_total: self.final_total,
        }
    }
}

/// Cached totals exactly as written to the quotation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub venue_rental_total: Decimal,
    pub room_total: Decimal,
    pub menu_total: Decimal,
    pub banquet_total: Decimal,
    pub grand_total: Decimal,
    pub final_total: Decimal,
}

impl QuoteTotals {
    pub fn zero() -> Self {
        Self {
            venue_rental_total: Decimal::ZERO,
            room_total: Decimal::ZERO,
            menu_total: Decimal::ZERO,
            banquet_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            final_total: Decimal::ZERO,
        }
    }
}
