use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod api;

pub use api::{ApiConfig, LookupConfig};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            api: ApiConfig::from_env()?,
            lookup: LookupConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "API base URL must not be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "API timeout must be greater than 0".to_string(),
            ));
        }

        if self.lookup.page_size == 0 {
            return Err(AppError::Configuration(
                "Lookup page size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
