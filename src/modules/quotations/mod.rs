// Quotations module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Quotation, QuotationStatus};
pub use repositories::QuotationRepository;
pub use services::QuotationService;
