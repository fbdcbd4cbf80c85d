use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::money::{ceil_rupees, format_rupees};
use crate::core::{AppError, Result};
use crate::modules::pricing::models::{CategoryBreakdown, QuoteBreakdown};
use crate::modules::pricing::services::QuotationTotalizer;
use crate::modules::proposals::models::ProposalDocument;
use crate::modules::quotations::models::Quotation;
use crate::modules::quotations::repositories::QuotationRepository;

/// ProposalRenderer re-derives a quotation's breakdown for the PDF,
/// independent of the editing session that produced it.
///
/// The stored discount amount is trusted verbatim (no ceiling re-check at
/// render time); only bases and GST are recomputed from line data. The
/// recomputed figures may differ from the persisted aggregates when catalog
/// prices moved after the save; that is expected, and line data wins. Only
/// when no line data survives at all do the persisted aggregates carry the
/// document.
pub struct ProposalRenderer {
    quotation_repo: Arc<dyn QuotationRepository>,
}

impl ProposalRenderer {
    pub fn new(quotation_repo: Arc<dyn QuotationRepository>) -> Self {
        Self { quotation_repo }
    }

    pub async fn render(&self, quotation_id: &str) -> Result<ProposalDocument> {
        let quotation = self
            .quotation_repo
            .find_by_id(quotation_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Quotation {}", quotation_id)))?;

        let breakdown = Self::breakdown_from_record(&quotation);

        info!(
            quotation_id = quotation_id,
            final_total = %breakdown.final_total,
            "proposal breakdown derived"
        );

        Ok(Self::document(&quotation, breakdown))
    }

    /// The same formulas as the live pipeline, over stored line data.
    pub fn breakdown_from_record(quotation: &Quotation) -> QuoteBreakdown {
        if quotation.lines.is_empty() {
            warn!(
                quotation_id = quotation.id.as_deref().unwrap_or_default(),
                "no line data on record; proposal falls back to persisted totals"
            );
            return Self::breakdown_from_aggregates(quotation);
        }

        QuotationTotalizer::compute_with_stored_discount(
            &quotation.lines,
            quotation.include_gst,
            quotation.discount_amount,
        )
    }

    /// Aggregate-only fallback: category totals stand in for bases, with
    /// the stored discount redistributed proportionally.
    fn breakdown_from_aggregates(quotation: &Quotation) -> QuoteBreakdown {
        let total_with_gst =
            quotation.venue_rental_total + quotation.room_total + quotation.menu_total;
        let discount = quotation.discount_amount.max(Decimal::ZERO);

        let share = |category_total: Decimal| {
            if total_with_gst > Decimal::ZERO && discount > Decimal::ZERO {
                discount * category_total / total_with_gst
            } else {
                Decimal::ZERO
            }
        };

        let category = |total: Decimal| CategoryBreakdown {
            base: total,
            gst: Decimal::ZERO,
            total_with_gst: total,
            discount_share: share(total),
        };

        QuoteBreakdown {
            venue: category(quotation.venue_rental_total),
            room: category(quotation.room_total),
            menu: category(quotation.menu_total),
            total_with_gst,
            discount_amount: discount,
            banquet_total: quotation.banquet_total,
            grand_total: quotation.grand_total,
            final_total: quotation.final_total,
        }
    }

    fn document(quotation: &Quotation, breakdown: QuoteBreakdown) -> ProposalDocument {
        let discount = ceil_rupees(breakdown.discount_amount);

        ProposalDocument {
            quotation_id: quotation.id.clone().unwrap_or_default(),
            client_name: quotation.client_name.clone(),
            event_date: quotation.event_date,
            include_gst: quotation.include_gst,
            venue: breakdown.venue.into(),
            room: breakdown.room.into(),
            menu: breakdown.menu.into(),
            subtotal: breakdown.banquet_total,
            formatted_subtotal: format_rupees(breakdown.banquet_total),
            discount_amount: discount,
            formatted_discount: format_rupees(discount),
            discount_reason: quotation.discount_reason.clone(),
            final_total: breakdown.final_total,
            formatted_final_total: format_rupees(breakdown.final_total),
        }
    }
}
