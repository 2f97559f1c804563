//! Logging utilities
//!
//! The crate logs through `tracing`; this module installs the subscriber
//! and keeps secrets out of log lines.

pub mod utils;

pub use utils::LoggingUtils;
