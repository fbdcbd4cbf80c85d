use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::pricing::models::{DiscountResolution, DiscountType};

/// DiscountResolver turns a requested discount into a monetary amount and a
/// ceiling verdict.
///
/// The verdict never blocks application; it exists to trigger admin
/// notification downstream. For fixed-amount discounts the local resolver
/// stays silent on the ceiling: the server-side check owns that verdict and
/// the live path overwrites whatever is computed here with the server's
/// answer, so client and server can never drift apart.
pub struct DiscountResolver;

impl DiscountResolver {
    /// Reject non-positive discount values before resolution. Surfaced as a
    /// user-facing validation error, not a resolver failure.
    pub fn validate_value(value: Decimal) -> Result<()> {
        if value <= Decimal::ZERO {
            return Err(AppError::validation(
                "Discount value must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolve a discount against a base amount (the GST-inclusive subtotal).
    pub fn resolve(
        discount_type: DiscountType,
        value: Decimal,
        base: Decimal,
        ceiling_percent: Decimal,
    ) -> DiscountResolution {
        match discount_type {
            DiscountType::Percentage => DiscountResolution {
                amount: base * value / Decimal::ONE_HUNDRED,
                exceeds_limit: value > ceiling_percent,
            },
            DiscountType::Fixed => DiscountResolution {
                // Never discount below zero net
                amount: value.min(base.max(Decimal::ZERO)),
                exceeds_limit: false,
            },
        }
    }

    /// The server-side verdict, used by the discount-check endpoint. This is
    /// the single authoritative ceiling computation for both modes: a fixed
    /// amount breaches the ceiling when it exceeds the rupee equivalent of
    /// `ceiling_percent` of the base.
    pub fn resolve_authoritative(
        discount_type: DiscountType,
        value: Decimal,
        base: Decimal,
        ceiling_percent: Decimal,
    ) -> DiscountResolution {
        let resolution = Self::resolve(discount_type, value, base, ceiling_percent);
        match discount_type {
            DiscountType::Percentage => resolution,
            DiscountType::Fixed => DiscountResolution {
                exceeds_limit: resolution.amount > base * ceiling_percent / Decimal::ONE_HUNDRED,
                ..resolution
            },
        }
    }
}
