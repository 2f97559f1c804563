//! Integration tests
//!
//! End-to-end flows across the quote engine, the page controllers and the
//! HTTP submitter.

pub mod client_tests;
pub mod quote_tests;
