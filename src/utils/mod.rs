//! Utility modules
//!
//! - **error**: error type, result alias, server error bodies
//! - **logging**: subscriber setup and log-safe formatting

pub mod error;
pub mod logging;

pub use logging::LoggingUtils;
