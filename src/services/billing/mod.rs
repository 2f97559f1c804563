//! Billing page glue
//!
//! Page controllers apply quote-engine results to the page, and a single
//! submission path posts billing forms to the server.

pub mod client;
pub mod form;
pub mod page;
pub mod payment;
pub mod tabs;


pub use client::{BillingClient, BillingEndpoint, SubmissionOutcome, Submitter};
pub use form::{BillingForm, FieldConstraints, FormElements, FormField};
pub use page::{BillingPage, PageView, UpgradePage, apply_panel, submit_form};
pub use payment::{
    PaymentRequest, PaymentToken, PaymentWidget, TokenReceiver, TokenSender, token_channel,
};
pub use tabs::TabSet;
