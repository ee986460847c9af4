//! Forms module.
//!
//! Onboarding, contact and per-creator application forms, each driven by a
//! [`FormFlow`].

mod application;
mod contact;
mod flow;
mod onboarding;

pub use application::{ApplicationReceipt, CreatorApplicationFields, CreatorApplicationForm};
pub use contact::{ContactFields, ContactForm, ContactRole, CONTACT_CONFIRMATION};
pub use flow::{FormFlow, FormState};
pub use onboarding::{
    interpret_response, OnboardingFields, OnboardingForm, OnboardingResponse,
    DEFAULT_ONBOARDING_ENDPOINT, GENERIC_SUBMISSION_ERROR, NETWORK_ERROR,
    ONBOARDING_CONFIRMATION,
};

use crate::error::HubError;

/// Fail with `FormIncomplete` naming every blank field, in order.
pub(crate) fn require(fields: &[(&str, &str)]) -> Result<(), HubError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(HubError::FormIncomplete(missing.join(", ")))
    }
}

pub(crate) fn require_email(email: &str) -> Result<(), HubError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(HubError::FormIncomplete(format!(
            "email address is invalid: {}",
            email
        ))),
    }
}
