//! HTTP submission of billing forms

use super::form::BillingForm;
use super::payment::PaymentToken;
use crate::config::ServerConfig;
use crate::utils::error::{BillingError, Result, ServerErrorBody};
use crate::utils::logging::LoggingUtils;
use async_trait::async_trait;
use reqwest::header;
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;

/// Billing endpoints a form can be posted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingEndpoint {
    /// Initial upgrade, by card or invoice
    Upgrade,
    /// Replace the card on file
    ChangeSource,
}

impl BillingEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Upgrade => "/json/billing/upgrade",
            Self::ChangeSource => "/json/billing/sources/change",
        }
    }
}

impl fmt::Display for BillingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of a submission the server answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    /// Non-success response; `msg` is shown to the user verbatim
    Rejected { msg: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Sends one billing form. Implementations issue at most one request and
/// never retry.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        endpoint: BillingEndpoint,
        form: &BillingForm,
        token: Option<&PaymentToken>,
    ) -> Result<SubmissionOutcome>;
}

/// `reqwest` based submitter
#[derive(Debug, Clone)]
pub struct BillingClient {
    http_client: reqwest::Client,
    base_url: Url,
    session_cookie: Option<String>,
}

impl BillingClient {
    /// `base_url` may carry a path prefix; endpoints are resolved below it.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn endpoint_url(&self, endpoint: BillingEndpoint) -> Result<Url> {
        Ok(self
            .base_url
            .join(endpoint.path().trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Submitter for BillingClient {
    async fn submit(
        &self,
        endpoint: BillingEndpoint,
        form: &BillingForm,
        token: Option<&PaymentToken>,
    ) -> Result<SubmissionOutcome> {
        form.check_validity()?;

        let url = self.endpoint_url(endpoint)?;
        let data = form.encode(token)?;

        info!(
            form = form.name(),
            endpoint = %endpoint,
            token = ?token.map(|t| LoggingUtils::mask_token(&t.id)),
            "Submitting billing form"
        );

        let mut request = self.http_client.post(url).form(&data);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(header::COOKIE, cookie.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| BillingError::network(format!("Failed to submit billing form: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            debug!(form = form.name(), %status, "Billing form accepted");
            return Ok(SubmissionOutcome::Success);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BillingError::network(format!("Failed to read response: {}", e)))?;
        let error = ServerErrorBody::from_body(&body);

        warn!(form = form.name(), %status, msg = %error.msg, "Billing form rejected");
        Ok(SubmissionOutcome::Rejected { msg: error.msg })
    }
}
