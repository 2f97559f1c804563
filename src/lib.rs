//! # seatbill
//!
//! Billing quote engine and upgrade-form client for per-seat plans.
//!
//! ## Features
//!
//! - **Quote engine**: discounted per-seat rates, the charge for the selected
//!   schedule, and dollar formatting that absorbs floating point drift
//! - **License panels**: exactly one license-management panel active at a time
//! - **Form submission**: one POST per action, server messages shown verbatim
//! - **Plan parameters**: the integer price and billing cycle actually invoiced
//!
//! ## Quick Start
//!
//! ```rust
//! use seatbill::config::PageParams;
//! use seatbill::services::pricing::{QuoteEngine, Schedule};
//!
//! let params = PageParams {
//!     annual_price: 8000.0,
//!     monthly_price: 800.0,
//!     percent_off: 20.0,
//!     seat_count: 10,
//!     ..Default::default()
//! };
//! let engine = QuoteEngine::new(&params).unwrap();
//! assert_eq!(engine.on_schedule_change(Schedule::Annual).to_string(), "640");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod services;
pub mod utils;

pub use config::Config;
pub use services::pricing::{QuoteEngine, format_money};
pub use utils::error::{BillingError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
