//! Affiliate onboarding form, submitted to an external webhook.

use hub_fetch::{FetchClient, FetchError, Response};
use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::forms::{require, require_email, FormFlow};

/// Apps Script web app that records onboarding submissions.
pub const DEFAULT_ONBOARDING_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbw37YPofCR7fjJMfyOk4XscBLHkaTIOEQf4h4nwN5THlmL-Ey9qckF9ouyIPwiox5Nk/exec";

pub const ONBOARDING_CONFIRMATION: &str = "Thanks \u{2014} your onboarding details have been \
     recorded. You can start browsing creators immediately while we review your profile.";

pub const GENERIC_SUBMISSION_ERROR: &str =
    "There was a problem recording your submission. Please try again.";

pub const NETWORK_ERROR: &str =
    "Network error while submitting. Please check your connection and try again.";

/// Payload posted to the webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingFields {
    /// Name or brand.
    pub name: String,
    pub email: String,
    pub primary_channel: String,
    /// Free-text reach estimate, e.g. "50k monthly views".
    pub monthly_reach: String,
    pub niches: String,
}

/// Body returned by the webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// ISO timestamp of when the row was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

/// Decide whether a webhook exchange succeeded.
///
/// Success needs a 2xx status, a parseable body and `ok: true`. Otherwise the
/// error text is the body's `error`, then its `message`, then a generic
/// message. Any transport failure becomes the network error message.
pub fn interpret_response(
    outcome: Result<Response, FetchError>,
) -> Result<OnboardingResponse, String> {
    let response = outcome.map_err(|_| NETWORK_ERROR.to_string())?;
    let body = response.json_opt::<OnboardingResponse>();

    match body {
        Some(body) if response.is_success() && body.ok => Ok(body),
        body => {
            let body = body.unwrap_or_default();
            Err(non_empty(body.error)
                .or_else(|| non_empty(body.message))
                .unwrap_or_else(|| GENERIC_SUBMISSION_ERROR.to_string()))
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The onboarding form and its submit cycle.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub fields: OnboardingFields,
    flow: FormFlow,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: OnboardingFields) -> Self {
        Self {
            fields,
            flow: FormFlow::new(),
        }
    }

    pub fn flow(&self) -> &FormFlow {
        &self.flow
    }

    /// Every field is required and the email must look like an address.
    pub fn validate(&self) -> Result<(), HubError> {
        require(&[
            ("name", self.fields.name.as_str()),
            ("email", self.fields.email.as_str()),
            ("primary channel", self.fields.primary_channel.as_str()),
            ("monthly reach", self.fields.monthly_reach.as_str()),
            ("niches", self.fields.niches.as_str()),
        ])?;
        require_email(&self.fields.email)
    }

    /// Post the fields to `endpoint`.
    ///
    /// On success the fields are cleared and the webhook's reply is returned.
    /// On failure the fields are left as they were so the user can retry, and
    /// the error carries the message to show.
    pub async fn submit(
        &mut self,
        client: &FetchClient,
        endpoint: &str,
    ) -> Result<OnboardingResponse, HubError> {
        self.validate()?;
        self.flow.begin_submit()?;

        let outcome = match client.post(endpoint).json(&self.fields) {
            Ok(request) => request.send().await,
            Err(e) => Err(e),
        };

        match interpret_response(outcome) {
            Ok(reply) => {
                self.flow.succeed(ONBOARDING_CONFIRMATION)?;
                self.fields = OnboardingFields::default();
                tracing::info!(
                    submitted_at = reply.submitted_at.as_deref().unwrap_or("-"),
                    "onboarding submission recorded"
                );
                Ok(reply)
            }
            Err(message) => {
                self.flow.fail(message.clone())?;
                tracing::warn!(error = %message, "onboarding submission failed");
                Err(HubError::Submission(message))
            }
        }
    }
}
