// Proposal rendering adapter

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ProposalCategory, ProposalDocument};
pub use services::ProposalRenderer;
