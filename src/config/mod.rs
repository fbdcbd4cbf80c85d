use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Pricing defaults used when the settings row is absent, plus the base URL
/// the discount-check client calls.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub default_max_discount_percentage: Decimal,
    pub discount_check_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let server = ServerConfig::from_env()?;
        let discount_check_base_url = env::var("DISCOUNT_CHECK_BASE_URL")
            .unwrap_or_else(|_| format!("http://{}", server.bind_address()));

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server,
            pricing: PricingConfig {
                default_max_discount_percentage: env::var("DEFAULT_MAX_DISCOUNT_PERCENTAGE")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration(
                            "Invalid DEFAULT_MAX_DISCOUNT_PERCENTAGE".to_string(),
                        )
                    })?,
                discount_check_base_url,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.pricing.default_max_discount_percentage < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Default discount ceiling cannot be negative".to_string(),
            ));
        }

        if self.pricing.discount_check_base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "Discount check base URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
