//! Payment widget boundary
//!
//! The widget hands back a token through a callback exactly once. That
//! callback is modeled as a one-shot channel: the widget owns the
//! [`TokenSender`], the submission path awaits the [`TokenReceiver`].

use crate::config::PaymentConfig;
use crate::utils::error::{BillingError, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Opaque, single-use payment credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentToken {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl PaymentToken {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }
}

/// Options the widget is opened with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub key: String,
    pub name: String,
    pub zip_code: bool,
    pub billing_address: bool,
    pub panel_label: String,
    pub email: Option<String>,
    pub label: String,
    pub allow_remember_me: bool,
    pub description: Option<String>,
}

impl PaymentRequest {
    /// Add a card and pay for the upgrade
    pub fn add_card(config: &PaymentConfig) -> Self {
        Self {
            key: config.publishable_key.clone(),
            name: "Seatbill".to_string(),
            zip_code: true,
            billing_address: config.collect_billing_address,
            panel_label: "Make payment".to_string(),
            email: config.email.clone(),
            label: "Add card".to_string(),
            allow_remember_me: false,
            description: Some(config.product_description.clone()),
        }
    }

    /// Replace the card on file
    pub fn update_card(config: &PaymentConfig) -> Self {
        Self {
            key: config.publishable_key.clone(),
            name: "Seatbill".to_string(),
            zip_code: true,
            billing_address: config.collect_billing_address,
            panel_label: "Update card".to_string(),
            email: config.email.clone(),
            label: "Update card".to_string(),
            allow_remember_me: false,
            description: None,
        }
    }
}

/// Third-party payment widget
pub trait PaymentWidget {
    /// Open the widget. It calls [`TokenSender::deliver`] at most once;
    /// closing without paying drops the sender.
    fn open(&self, request: &PaymentRequest, on_token: TokenSender);
}

/// Widget side of the token hand-off
#[derive(Debug)]
pub struct TokenSender {
    inner: oneshot::Sender<PaymentToken>,
}

impl TokenSender {
    pub fn deliver(self, token: PaymentToken) -> Result<()> {
        self.inner
            .send(token)
            .map_err(|_| BillingError::internal("Token receiver dropped before delivery"))
    }
}

/// Submission side of the token hand-off
#[derive(Debug)]
pub struct TokenReceiver {
    inner: oneshot::Receiver<PaymentToken>,
}

impl TokenReceiver {
    /// Wait for the single token
    pub async fn recv(self) -> Result<PaymentToken> {
        self.inner
            .await
            .map_err(|_| BillingError::payment_cancelled("Payment widget closed without a token"))
    }
}

pub fn token_channel() -> (TokenSender, TokenReceiver) {
    let (tx, rx) = oneshot::channel();
    (TokenSender { inner: tx }, TokenReceiver { inner: rx })
}
