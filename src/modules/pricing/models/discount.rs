use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Value is a percentage of the GST-inclusive subtotal
    Percentage,

    /// Value is a rupee amount, capped at the GST-inclusive subtotal
    Fixed,
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountType::Percentage => write!(f, "percentage"),
            DiscountType::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountType::Percentage),
            "fixed" => Ok(DiscountType::Fixed),
            _ => Err(format!("Invalid discount type: {}", s)),
        }
    }
}

/// Discount as applied to a quotation.
///
/// `discount_amount` and `discount_exceeds_limit` are derived figures; the
/// service layer overwrites them from the resolver (or the authoritative
/// server check) and nothing else may set them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSpec {
    pub discount_type: DiscountType,

    pub discount_value: Decimal,

    #[serde(default)]
    pub discount_amount: Decimal,

    #[serde(default)]
    pub discount_reason: Option<String>,

    #[serde(default)]
    pub discount_exceeds_limit: bool,
}

impl DiscountSpec {
    pub fn new(discount_type: DiscountType, discount_value: Decimal) -> Self {
        Self {
            discount_type,
            discount_value,
            discount_amount: Decimal::ZERO,
            discount_reason: None,
            discount_exceeds_limit: false,
        }
    }
}

/// Outcome of resolving a discount against a base amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountResolution {
    /// Monetary discount, always applied even when the ceiling is breached
    pub amount: Decimal,

    /// Ceiling breach flag; triggers admin notification, never blocks
    pub exceeds_limit: bool,
}

impl DiscountResolution {
    pub fn none() -> Self {
        Self {
            amount: Decimal::ZERO,
            exceeds_limit: false,
        }
    }
}
