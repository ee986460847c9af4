//! Contact and support form. Submissions stay local.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::forms::{require, require_email, FormFlow};

pub const CONTACT_CONFIRMATION: &str = "Thanks for reaching out \u{2014} your message has been \
     received and queued for review. We'll get back to you within 2\u{2013}3 business days.";

/// Who is getting in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContactRole {
    #[default]
    Affiliate,
    #[serde(rename = "Etsy Creator")]
    Creator,
    Brand,
    Other,
}

impl ContactRole {
    pub const ALL: [ContactRole; 4] = [
        ContactRole::Affiliate,
        ContactRole::Brand,
        ContactRole::Creator,
        ContactRole::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactRole::Affiliate => "Affiliate / creator",
            ContactRole::Creator => "Etsy creator",
            ContactRole::Brand => "Brand / agency",
            ContactRole::Other => "Other",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ContactRole {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "affiliate" => Ok(ContactRole::Affiliate),
            "creator" | "etsy creator" | "etsy-creator" => Ok(ContactRole::Creator),
            "brand" | "agency" => Ok(ContactRole::Brand),
            "other" => Ok(ContactRole::Other),
            _ => Err(HubError::UnknownOption {
                kind: "contact role",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    /// Name or organization.
    pub name: String,
    pub email: String,
    pub role: ContactRole,
    pub topic: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    flow: FormFlow,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            flow: FormFlow::new(),
        }
    }

    pub fn flow(&self) -> &FormFlow {
        &self.flow
    }

    pub fn validate(&self) -> Result<(), HubError> {
        require(&[
            ("name", self.fields.name.as_str()),
            ("email", self.fields.email.as_str()),
            ("topic", self.fields.topic.as_str()),
            ("message", self.fields.message.as_str()),
        ])?;
        require_email(&self.fields.email)
    }

    /// Record the message and reset the form.
    ///
    /// Returns the submitted fields so the caller can hand them on.
    pub fn submit(&mut self) -> Result<ContactFields, HubError> {
        self.validate()?;
        self.flow.begin_submit()?;
        let submitted = std::mem::take(&mut self.fields);
        self.flow.succeed(CONTACT_CONFIRMATION)?;
        tracing::info!(role = ?submitted.role, topic = %submitted.topic, "contact message recorded");
        Ok(submitted)
    }
}
