// The breakdown object handed to the PDF engine.
//
// Every amount is already ceiled to whole rupees and carries a formatted
// twin with Indian digit grouping; the document layer does layout only and
// never does arithmetic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::{ceil_rupees, format_rupees};
use crate::modules::pricing::models::CategoryBreakdown;

/// One category block on the proposal
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalCategory {
    pub base: Decimal,
    pub gst: Decimal,
    pub total_with_gst: Decimal,
    pub discount_share: Decimal,
    pub formatted_total: String,
}

impl From<CategoryBreakdown> for ProposalCategory {
    fn from(breakdown: CategoryBreakdown) -> Self {
        let total = breakdown.rounded_total();
        Self {
            base: ceil_rupees(breakdown.base),
            gst: ceil_rupees(breakdown.gst),
            total_with_gst: total,
            discount_share: breakdown.rounded_discount_share(),
            formatted_total: format_rupees(total),
        }
    }
}

/// The full proposal input document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDocument {
    pub quotation_id: String,
    pub client_name: String,
    pub event_date: Option<NaiveDate>,
    pub include_gst: bool,

    pub venue: ProposalCategory,
    pub room: ProposalCategory,
    pub menu: ProposalCategory,

    /// Pre-discount GST-inclusive subtotal
    pub subtotal: Decimal,
    pub formatted_subtotal: String,

    pub discount_amount: Decimal,
    pub formatted_discount: String,
    pub discount_reason: Option<String>,

    /// Amount payable
    pub final_total: Decimal,
    pub formatted_final_total: String,
}
