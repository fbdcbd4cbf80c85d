mod quotation;

pub use quotation::{
    ApplyDiscountRequest, CreateQuotationRequest, Quotation, QuotationResponse, QuotationStatus,
    UpdateQuotationRequest,
};
