//! Contact submission over HTTP
//!
//! Drives a `ContactFormController` through one request to the
//! form-processing endpoint. No retries: a failure leaves the controller in
//! the error state with the input intact.

use crate::error::Result;
use portfolio_common::contact::{ContactFormController, ResetTicket, SubmitOutcome};
use reqwest::header::ACCEPT;
use std::time::Duration;

pub struct ContactClient {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl ContactClient {
    /// `endpoint` of `None` means nothing is configured; every send then
    /// fails without touching the network.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Submit the controller's form.
    ///
    /// Errors only when the form cannot be submitted at all (invalid input or
    /// a request already in flight). Network and HTTP failures are reported
    /// through the controller's state instead.
    pub async fn send(&self, controller: &mut ContactFormController) -> Result<Option<ResetTicket>> {
        let fields = controller.begin_submit()?;

        let outcome = match &self.endpoint {
            Some(endpoint) => self.post(endpoint, &fields).await,
            None => SubmitOutcome::NotConfigured,
        };

        if outcome.is_success() {
            tracing::info!(?outcome, "contact form accepted");
        } else {
            tracing::warn!(?outcome, "contact form rejected");
        }

        Ok(controller.finish(outcome))
    }

    async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> SubmitOutcome {
        tracing::debug!(endpoint, fields = fields.len(), "posting contact form");

        let response = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await;

        match response {
            Ok(resp) => SubmitOutcome::Status(resp.status().as_u16()),
            Err(e) => SubmitOutcome::Transport(e.to_string()),
        }
    }
}
