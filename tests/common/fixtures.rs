//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use super::view::RecordingView;
use async_trait::async_trait;
use seatbill::config::{BillingConfig, PageParams, PaymentConfig, ServerConfig};
use seatbill::services::billing::{
    BillingEndpoint, BillingForm, FieldConstraints, PaymentRequest, PaymentToken, PaymentWidget,
    SubmissionOutcome, Submitter, TokenSender,
};
use seatbill::services::pricing::plan::min_invoiced_licenses;
use seatbill::{BillingError, Result};
use std::sync::{Arc, Mutex};

/// Factory for upgrade page configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// 10 seats at list price with a 20% discount
    pub fn discounted() -> BillingConfig {
        Self::with_page(PageParams {
            annual_price: 8000.0,
            monthly_price: 800.0,
            percent_off: 20.0,
            seat_count: 10,
            ..Default::default()
        })
    }

    pub fn with_page(page: PageParams) -> BillingConfig {
        BillingConfig {
            page,
            payment: PaymentConfig {
                publishable_key: "pk_test_seatbill".to_string(),
                email: Some("billing-admin@example.com".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn pointing_at(base_url: &str) -> BillingConfig {
        let mut config = Self::discounted();
        config.server = ServerConfig {
            base_url: base_url.to_string(),
            timeout: 5,
            ..Default::default()
        };
        config
    }
}

/// Factory for pages as the server renders them
pub struct PageFactory;

impl PageFactory {
    /// Upgrade page with the automatic/annual radios checked and valid
    /// license counts filled in
    pub fn upgrade(seat_count: u32) -> RecordingView {
        let seats = i64::from(seat_count);
        let mut view = RecordingView::default();
        view.check("license_management", "automatic");
        view.check("schedule", "annual");

        let autopay = BillingForm::new("autopay")
            .field("signed_seat_count", "signed:10")
            .field("salt", "salt123")
            .field("schedule", "annual")
            .field("license_management", "automatic")
            .input(
                "automatic_license_count",
                "licenses",
                seat_count.to_string(),
                FieldConstraints::required().with_min(seats),
            )
            .input(
                "manual_license_count",
                "licenses",
                seat_count.to_string(),
                FieldConstraints::required().with_min(seats),
            )
            .input(
                "invoiced_license_count",
                "licenses",
                seat_count.to_string(),
                FieldConstraints::required().with_min(seats),
            );

        let invoice = BillingForm::new("invoice")
            .field("signed_seat_count", "signed:10")
            .field("salt", "salt123")
            .field("billing_modality", "send_invoice")
            .field("schedule", "annual")
            .input(
                "invoiced_licenses",
                "licenses",
                "",
                FieldConstraints::required()
                    .with_min(i64::from(min_invoiced_licenses(seat_count))),
            );

        view.forms.insert("autopay-form".to_string(), autopay);
        view.forms.insert("invoice-form".to_string(), invoice);
        view
    }

    /// Billing management page with the card-change form
    pub fn billing() -> RecordingView {
        let mut view = RecordingView::default();
        view.forms.insert(
            "cardchange-form".to_string(),
            BillingForm::new("cardchange"),
        );
        view
    }
}

/// What the fake submitter answers with
#[derive(Debug, Clone)]
pub enum Reply {
    Outcome(SubmissionOutcome),
    NetworkDown,
}

type Call = (BillingEndpoint, BillingForm, Option<PaymentToken>);

/// Submitter that records calls instead of sending them. Clones share
/// the call log, so a test can keep one while the page owns another.
#[derive(Clone)]
pub struct RecordingSubmitter {
    reply: Reply,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingSubmitter {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting() -> Self {
        Self::replying(Reply::Outcome(SubmissionOutcome::Success))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(
        &self,
        endpoint: BillingEndpoint,
        form: &BillingForm,
        token: Option<&PaymentToken>,
    ) -> Result<SubmissionOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint, form.clone(), token.cloned()));

        match &self.reply {
            Reply::Outcome(outcome) => Ok(outcome.clone()),
            Reply::NetworkDown => Err(BillingError::network("connection refused")),
        }
    }
}

/// Widget that answers immediately, or closes when it has no token
pub struct InstantWidget {
    token: Option<PaymentToken>,
    pub opened: Mutex<Vec<PaymentRequest>>,
}

impl InstantWidget {
    pub fn paying(token_id: &str) -> Self {
        Self {
            token: Some(PaymentToken::new(token_id)),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn closing() -> Self {
        Self {
            token: None,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

impl PaymentWidget for InstantWidget {
    fn open(&self, request: &PaymentRequest, on_token: TokenSender) {
        self.opened.lock().unwrap().push(request.clone());
        if let Some(token) = &self.token {
            on_token.deliver(token.clone()).unwrap();
        }
    }
}
