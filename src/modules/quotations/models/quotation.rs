// Quotation aggregate.
//
// A quotation owns the three line collections, the discount, the GST flag
// and six cached totals. The totals are a cache of the totalizer's output,
// recomputed and overwritten on every edit and once more defensively at
// submit time; the line collections stay the source of truth.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::pricing::models::{
    DiscountSpec, DiscountType, QuotationLines, QuoteBreakdown, QuoteTotals,
};
use crate::modules::pricing::services::QuotationTotalizer;

/// Quotation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    /// Being edited; totals recomputed on every change
    Draft,

    /// Sent to the client; figures are the ones on the proposal
    Submitted,

    /// Converted to a confirmed booking
    Booked,

    /// Withdrawn or declined
    Cancelled,
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Draft
    }
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotationStatus::Draft => write!(f, "draft"),
            QuotationStatus::Submitted => write!(f, "submitted"),
            QuotationStatus::Booked => write!(f, "booked"),
            QuotationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for QuotationStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(QuotationStatus::Draft),
            "submitted" => Ok(QuotationStatus::Submitted),
            "booked" => Ok(QuotationStatus::Booked),
            "cancelled" => Ok(QuotationStatus::Cancelled),
            _ => Err(format!("Invalid quotation status: {}", s)),
        }
    }
}

/// Persisted quotation aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(skip_deserializing)]
    pub id: Option<String>,

    pub client_name: String,

    #[serde(default)]
    pub client_contact: Option<String>,

    #[serde(default)]
    pub event_date: Option<NaiveDate>,

    /// The three line collections, persisted verbatim
    #[serde(default)]
    pub lines: QuotationLines,

    #[serde(default)]
    pub include_gst: bool,

    // Discount as applied; amount and exceeds flag are derived, set only by
    // the resolver or the authoritative server check
    #[serde(default)]
    pub discount_type: Option<DiscountType>,

    #[serde(default)]
    pub discount_value: Decimal,

    #[serde(skip_deserializing)]
    pub discount_amount: Decimal,

    #[serde(default)]
    pub discount_reason: Option<String>,

    #[serde(skip_deserializing)]
    pub discount_exceeds_limit: bool,

    // Cached totals, overwritten by every recompute
    #[serde(skip_deserializing)]
    pub venue_rental_total: Decimal,

    #[serde(skip_deserializing)]
    pub room_total: Decimal,

    #[serde(skip_deserializing)]
    pub menu_total: Decimal,

    #[serde(skip_deserializing)]
    pub banquet_total: Decimal,

    #[serde(skip_deserializing)]
    pub grand_total: Decimal,

    #[serde(skip_deserializing)]
    pub final_total: Decimal,

    #[serde(skip_deserializing)]
    pub status: QuotationStatus,

    #[serde(skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_deserializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quotation {
    /// Create a draft quotation and run the first recompute.
    pub fn new(
        client_name: String,
        client_contact: Option<String>,
        event_date: Option<NaiveDate>,
        lines: QuotationLines,
        include_gst: bool,
        ceiling_percent: Decimal,
    ) -> Result<Self> {
        Self::validate_client_name(&client_name)?;

        let now = Utc::now();
        let mut quotation = Self {
            id: Some(Uuid::new_v4().to_string()),
            client_name,
            client_contact,
            event_date,
            lines,
            include_gst,
            discount_type: None,
            discount_value: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            discount_reason: None,
            discount_exceeds_limit: false,
            venue_rental_total: Decimal::ZERO,
            room_total: Decimal::ZERO,
            menu_total: Decimal::ZERO,
            banquet_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            final_total: Decimal::ZERO,
            status: QuotationStatus::Draft,
            created_at: Some(now),
            updated_at: Some(now),
        };

        quotation.recalculate(ceiling_percent);
        Ok(quotation)
    }

    /// The applied discount as a `DiscountSpec`, when one is present.
    pub fn discount_spec(&self) -> Option<DiscountSpec> {
        self.discount_type.map(|discount_type| DiscountSpec {
            discount_type,
            discount_value: self.discount_value,
            discount_amount: self.discount_amount,
            discount_reason: self.discount_reason.clone(),
            discount_exceeds_limit: self.discount_exceeds_limit,
        })
    }

    /// Recompute every cached total from the line collections.
    ///
    /// The discount amount is re-resolved against the fresh GST-inclusive
    /// subtotal; the ceiling verdict is only refreshed for percentage
    /// discounts; for fixed discounts the stored server verdict stands.
    pub fn recalculate(&mut self, ceiling_percent: Decimal) -> QuoteBreakdown {
        let spec = self.discount_spec();
        let result =
            QuotationTotalizer::compute(&self.lines, self.include_gst, spec.as_ref(), ceiling_percent);

        if let Some(discount_type) = self.discount_type {
            self.discount_amount = result.resolution.amount;
            if discount_type == DiscountType::Percentage {
                self.discount_exceeds_limit = result.resolution.exceeds_limit;
            }
        } else {
            self.discount_amount = Decimal::ZERO;
            self.discount_exceeds_limit = false;
        }

        self.apply_totals(result.breakdown.totals());
        result.breakdown
    }

    fn apply_totals(&mut self, totals: QuoteTotals) {
        self.venue_rental_total = totals.venue_rental_total;
        self.room_total = totals.room_total;
        self.menu_total = totals.menu_total;
        self.banquet_total = totals.banquet_total;
        self.grand_total = totals.grand_total;
        self.final_total = totals.final_total;
        self.updated_at = Some(Utc::now());
    }

    /// Display breakdown for the current state, trusting the stored
    /// discount amount (no re-resolution).
    pub fn breakdown(&self) -> QuoteBreakdown {
        QuotationTotalizer::compute_with_stored_discount(
            &self.lines,
            self.include_gst,
            self.discount_amount,
        )
    }

    pub fn is_editable(&self) -> bool {
        self.status == QuotationStatus::Draft
    }

    /// Status transitions: drafts can be submitted or cancelled, submitted
    /// quotations can be booked, cancelled or reopened as drafts.
    pub fn update_status(&mut self, new_status: QuotationStatus) -> Result<()> {
        let allowed = matches!(
            (self.status, new_status),
            (QuotationStatus::Draft, QuotationStatus::Submitted)
                | (QuotationStatus::Draft, QuotationStatus::Cancelled)
                | (QuotationStatus::Submitted, QuotationStatus::Booked)
                | (QuotationStatus::Submitted, QuotationStatus::Cancelled)
                | (QuotationStatus::Submitted, QuotationStatus::Draft)
        );

        if !allowed {
            return Err(AppError::validation(format!(
                "Invalid status transition from {} to {}",
                self.status, new_status
            )));
        }

        self.status = new_status;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn validate_client_name(client_name: &str) -> Result<()> {
        if client_name.trim().is_empty() {
            return Err(AppError::validation("Client name cannot be empty"));
        }

        if client_name.len() > 255 {
            return Err(AppError::validation(
                "Client name cannot exceed 255 characters",
            ));
        }

        Ok(())
    }
}

/// Request body for creating a quotation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationRequest {
    pub client_name: String,

    #[serde(default)]
    pub client_contact: Option<String>,

    #[serde(default)]
    pub event_date: Option<NaiveDate>,

    #[serde(default)]
    pub lines: QuotationLines,

    #[serde(default = "default_include_gst")]
    pub include_gst: bool,
}

fn default_include_gst() -> bool {
    true
}

/// Request body for editing a draft quotation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuotationRequest {
    #[serde(default)]
    pub client_name: Option<String>,

    #[serde(default)]
    pub client_contact: Option<String>,

    #[serde(default)]
    pub event_date: Option<NaiveDate>,

    #[serde(default)]
    pub lines: Option<QuotationLines>,

    #[serde(default)]
    pub include_gst: Option<bool>,
}

/// Request body for applying a discount
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyDiscountRequest {
    pub discount_type: DiscountType,
    pub discount_value: Decimal,

    #[serde(default)]
    pub discount_reason: Option<String>,
}

/// Quotation plus its freshly derived breakdown
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationResponse {
    #[serde(flatten)]
    pub quotation: Quotation,

    pub breakdown: QuoteBreakdown,
}

impl From<Quotation> for QuotationResponse {
    fn from(quotation: Quotation) -> Self {
        let breakdown = quotation.breakdown();
        Self {
            quotation,
            breakdown,
        }
    }
}
