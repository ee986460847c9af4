//! Per-creator affiliate application form.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::CreatorRecord;
use crate::error::HubError;
use crate::forms::{require, require_email, FormFlow};
use crate::ids::CreatorId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorApplicationFields {
    /// Optional; the confirmation addresses "affiliate" when empty.
    pub name: String,
    pub email: String,
    pub primary_channel: String,
    /// Short description of the audience and content.
    pub audience_summary: String,
}

/// What the affiliate gets back after applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub creator_id: CreatorId,
    /// e.g. `AFF-MODPARTY-20251001`.
    pub reference: String,
    pub message: String,
}

impl ApplicationReceipt {
    pub fn reference_for(creator_id: &CreatorId, date: NaiveDate) -> String {
        format!(
            "AFF-{}-{}",
            creator_id.as_str().to_uppercase(),
            date.format("%Y%m%d")
        )
    }
}

/// Application to one creator's program. Recorded locally.
#[derive(Debug, Clone, Default)]
pub struct CreatorApplicationForm {
    pub fields: CreatorApplicationFields,
    flow: FormFlow,
}

impl CreatorApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: CreatorApplicationFields) -> Self {
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
            ("email", self.fields.email.as_str()),
            ("primary channel", self.fields.primary_channel.as_str()),
            ("audience summary", self.fields.audience_summary.as_str()),
        ])?;
        require_email(&self.fields.email)
    }

    /// Apply to `creator` today, in local time.
    pub fn submit(&mut self, creator: &CreatorRecord) -> Result<ApplicationReceipt, HubError> {
        self.submit_on(creator, Local::now().date_naive())
    }

    /// Apply to `creator`, stamping the reference with `date`.
    pub fn submit_on(
        &mut self,
        creator: &CreatorRecord,
        date: NaiveDate,
    ) -> Result<ApplicationReceipt, HubError> {
        self.validate()?;
        self.flow.begin_submit()?;

        let reference = ApplicationReceipt::reference_for(&creator.id, date);
        let name = match self.fields.name.as_str() {
            "" => "affiliate",
            name => name,
        };
        let message = format!(
            "Thanks, {} \u{2014} your application for {} has been recorded with reference {}. \
             Expect a response within 2\u{2013}3 business days.",
            name, creator.shop_name, reference
        );

        self.flow.succeed(message.clone())?;
        self.fields = CreatorApplicationFields::default();
        tracing::info!(creator = %creator.id, %reference, "creator application recorded");

        Ok(ApplicationReceipt {
            creator_id: creator.id.clone(),
            reference,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::creator;

    fn filled(name: &str) -> CreatorApplicationForm {
        CreatorApplicationForm::with_fields(CreatorApplicationFields {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            primary_channel: "Pinterest".to_string(),
            audience_summary: "Wedding planners".to_string(),
        })
    }

    fn oct_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    #[test]
    fn test_reference_format() {
        let reference = ApplicationReceipt::reference_for(&CreatorId::new("modparty"), oct_first());
        assert_eq!(reference, "AFF-MODPARTY-20251001");
    }

    #[test]
    fn test_confirmation_message() {
        let shop = creator("modparty", "Wedding & Party", 4.9, 10);
        let mut form = filled("Ada");

        let receipt = form.submit_on(&shop, oct_first()).unwrap();

        assert_eq!(
            receipt.message,
            "Thanks, Ada \u{2014} your application for modparty Shop has been recorded with \
             reference AFF-MODPARTY-20251001. Expect a response within 2\u{2013}3 business days."
        );
        assert_eq!(form.fields, CreatorApplicationFields::default());
        assert_eq!(form.flow().confirmation(), Some(receipt.message.as_str()));
    }

    #[test]
    fn test_empty_name_falls_back() {
        let shop = creator("yakutum", "Jewelry", 4.9, 10);
        let receipt = filled("").submit_on(&shop, oct_first()).unwrap();
        assert!(receipt.message.starts_with("Thanks, affiliate \u{2014}"));

        // Only an empty name falls back; whitespace is used verbatim.
        let receipt = filled(" ").submit_on(&shop, oct_first()).unwrap();
        assert!(receipt.message.starts_with("Thanks,   \u{2014}"));
    }

    #[test]
    fn test_incomplete_application() {
        let shop = creator("yakutum", "Jewelry", 4.9, 10);
        let mut form = filled("Ada");
        form.fields.audience_summary.clear();
        assert!(form.submit_on(&shop, oct_first()).is_err());
        assert_eq!(form.fields.name, "Ada");
    }
}
