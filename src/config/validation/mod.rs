//! Configuration validation
//!
//! Each configuration section implements [`Validate`]; errors are plain
//! strings that [`crate::config::Config::validate`] wraps into
//! `BillingError::Config` with the section name.

mod config_validators;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
