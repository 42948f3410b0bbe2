use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Backend REST API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the accounting backend, e.g. `http://localhost:8000/api`
    pub base_url: String,
    pub timeout_secs: u64,
    pub retry_max_attempts: u32,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ApiConfig {
            base_url: env::var("LEDGERDESK_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            timeout_secs: env::var("LEDGERDESK_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid LEDGERDESK_API_TIMEOUT_SECS".to_string())
                })?,
            retry_max_attempts: env::var("LEDGERDESK_API_RETRY_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid LEDGERDESK_API_RETRY_MAX_ATTEMPTS".to_string())
                })?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join a backend path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Product and HSN lookup behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Quiet period before a keystroke actually triggers a catalog search
    pub debounce_ms: u64,
    /// Maximum number of search results requested per query
    pub page_size: u32,
}

impl LookupConfig {
    pub fn from_env() -> Result<Self> {
        Ok(LookupConfig {
            debounce_ms: env::var("LEDGERDESK_SEARCH_DEBOUNCE_MS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid LEDGERDESK_SEARCH_DEBOUNCE_MS".to_string())
                })?,
            page_size: env::var("LEDGERDESK_SEARCH_PAGE_SIZE")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid LEDGERDESK_SEARCH_PAGE_SIZE".to_string())
                })?,
        })
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
