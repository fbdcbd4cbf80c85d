// Catalog module (read-side collaborator for the pricing engine)

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AdditionalItem, MenuItem, MenuPackage, RoomType, Venue};
pub use repositories::CatalogRepository;
pub use services::CatalogService;
