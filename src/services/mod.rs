//! Services module
//!
//! This module contains the billing business logic: the quote engine and
//! the page glue that submits billing forms.

pub mod billing;
pub mod pricing;

pub use billing::{
    BillingClient, BillingEndpoint, BillingForm, BillingPage, PageView, PaymentToken,
    PaymentWidget, SubmissionOutcome, Submitter, UpgradePage,
};
pub use pricing::{
    BillingSelection, ChargeAmount, LicenseMode, PanelState, PriceDisplay, PriceQuote,
    QuoteEngine, Schedule,
};
