//! Configuration data models
//!
//! This module defines all configuration structures used by the billing client.

#![allow(missing_docs)]

pub mod billing;
pub mod logging;
pub mod page;
pub mod payment;
pub mod server;

pub use billing::*;
pub use logging::*;
pub use page::*;
pub use payment::*;
pub use server::*;

/// Default billing server
pub fn default_base_url() -> String {
    "http://localhost:9991".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_user_agent() -> String {
    format!("seatbill/{}", env!("CARGO_PKG_VERSION"))
}

/// Annual list price per seat, in cents
pub fn default_annual_price() -> f64 {
    8000.0
}

/// Monthly list price per seat, in cents
pub fn default_monthly_price() -> f64 {
    800.0
}

pub fn default_product_description() -> String {
    "Cloud Standard".to_string()
}

pub fn default_true() -> bool {
    true
}
