//! Validators for the billing configuration sections

use super::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for BillingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating billing configuration");

        self.server.validate()?;
        self.page.validate()?;
        self.payment.validate()?;

        debug!("Billing configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.timeout == 0 {
            return Err("Server timeout must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for PageParams {
    fn validate(&self) -> Result<(), String> {
        for (name, price) in [
            ("annual_price", self.annual_price),
            ("monthly_price", self.monthly_price),
        ] {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("{} must be a non-negative amount", name));
            }
        }

        if !(0.0..=100.0).contains(&self.percent_off) {
            return Err(format!(
                "percent_off must be between 0 and 100, got {}",
                self.percent_off
            ));
        }

        Ok(())
    }
}

impl Validate for PaymentConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(format!("Invalid billing email: {}", email));
            }
        }

        if self.product_description.trim().is_empty() {
            return Err("Product description cannot be empty".to_string());
        }

        Ok(())
    }
}
