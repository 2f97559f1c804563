//! Common test utilities for seatbill
//!
//! - A recording page view standing in for the browser DOM
//! - Config and page factories
//! - Fake submitter and payment widget

pub mod fixtures;
pub mod view;

pub use fixtures::{ConfigFactory, InstantWidget, PageFactory, RecordingSubmitter, Reply};
pub use view::RecordingView;
