use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::modules::pricing::models::DiscountType;

/// Venue-wide settings record. A missing row falls back to defaults rather
/// than failing the read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SystemSettings {
    /// Discount ceiling in percent; discounts above it trigger admin
    /// notification but still apply
    pub max_discount_percentage: Decimal,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            max_discount_percentage: Decimal::from(10),
        }
    }
}

/// Request body for the discount-ceiling check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCheckRequest {
    pub discount_type: DiscountType,
    pub discount_value: Decimal,

    /// GST-inclusive subtotal the discount applies to
    pub grand_total: Decimal,
}

/// The server's verdict. Clients must treat `discount_amount` and
/// `exceeds_limit` as authoritative over any local recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCheckResponse {
    pub exceeds_limit: bool,
    pub reason: String,
    pub discount_amount: Decimal,
    pub max_discount_percentage: Decimal,
}
