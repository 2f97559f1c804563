//! Configuration management for the billing client
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BillingError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub billing: BillingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BillingError::Config(format!("Failed to read config file: {}", e)))?;

        let billing: BillingConfig = serde_yaml::from_str(&content)
            .map_err(|e| BillingError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { billing };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, starting from defaults.
    /// Keys are the `SEATBILL_*` environment variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Loading configuration from environment variables");

        let mut billing = BillingConfig::default();

        if let Some(url) = lookup("SEATBILL_BASE_URL") {
            billing.server.base_url = url;
        }
        if let Some(timeout) = lookup("SEATBILL_TIMEOUT_SECS") {
            billing.server.timeout = timeout
                .parse()
                .map_err(|e| BillingError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(cookie) = lookup("SEATBILL_SESSION_COOKIE") {
            billing.server.session_cookie = Some(cookie);
        }
        if let Some(price) = lookup("SEATBILL_ANNUAL_PRICE") {
            billing.page.annual_price = price
                .parse()
                .map_err(|e| BillingError::Config(format!("Invalid annual price: {}", e)))?;
        }
        if let Some(price) = lookup("SEATBILL_MONTHLY_PRICE") {
            billing.page.monthly_price = price
                .parse()
                .map_err(|e| BillingError::Config(format!("Invalid monthly price: {}", e)))?;
        }
        if let Some(percent) = lookup("SEATBILL_PERCENT_OFF") {
            billing.page.percent_off = percent
                .parse()
                .map_err(|e| BillingError::Config(format!("Invalid percent off: {}", e)))?;
        }
        if let Some(seats) = lookup("SEATBILL_SEAT_COUNT") {
            billing.page.seat_count = seats
                .parse()
                .map_err(|e| BillingError::Config(format!("Invalid seat count: {}", e)))?;
        }
        if let Some(mode) = lookup("SEATBILL_LICENSE_MANAGEMENT") {
            billing.page.license_management = mode.parse()?;
        }
        if let Some(schedule) = lookup("SEATBILL_SCHEDULE") {
            billing.page.schedule = schedule.parse()?;
        }
        if let Some(key) = lookup("SEATBILL_PAYMENT_KEY") {
            billing.payment.publishable_key = key;
        }
        if let Some(email) = lookup("SEATBILL_EMAIL") {
            billing.payment.email = Some(email);
        }

        let config = Self { billing };
        config.validate()?;
        Ok(config)
    }

    pub fn server(&self) -> &ServerConfig {
        &self.billing.server
    }

    pub fn page(&self) -> &PageParams {
        &self.billing.page
    }

    pub fn payment(&self) -> &PaymentConfig {
        &self.billing.payment
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.billing.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.billing
            .server
            .validate()
            .map_err(|e| BillingError::Config(format!("Server config error: {}", e)))?;

        self.billing
            .page
            .validate()
            .map_err(|e| BillingError::Config(format!("Page config error: {}", e)))?;

        self.billing
            .payment
            .validate()
            .map_err(|e| BillingError::Config(format!("Payment config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.billing)
            .map_err(|e| BillingError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
