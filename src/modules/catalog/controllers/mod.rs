mod catalog_controller;

pub use catalog_controller::configure;
