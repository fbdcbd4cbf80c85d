// System settings + authoritative discount-ceiling check

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DiscountCheckRequest, DiscountCheckResponse, SystemSettings};
pub use repositories::SettingsRepository;
pub use services::SettingsService;
