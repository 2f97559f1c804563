//! Error handling for billing
//!
//! This module defines all error types used throughout the crate.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{CONTACT_SUPPORT, ServerErrorBody, TRY_RELOADING};
pub use types::{BillingError, Result};
