mod proposal_controller;

pub use proposal_controller::configure;
