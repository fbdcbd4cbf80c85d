mod discount_check;
mod quotation_service;

pub use discount_check::{DiscountChecker, HttpDiscountChecker};
pub use quotation_service::QuotationService;
