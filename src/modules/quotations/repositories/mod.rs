mod quotation_repository;

pub use quotation_repository::{MySqlQuotationRepository, QuotationRepository};
