//! Form submission state machine.

use crate::error::HubError;
use serde::{Deserialize, Serialize};

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormState {
    /// Fields are being filled in.
    #[default]
    Editing,
    /// A submission is in flight; another may not start.
    Submitting,
    Succeeded,
    Failed,
}

impl FormState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormState::Editing => "editing",
            FormState::Submitting => "submitting",
            FormState::Succeeded => "succeeded",
            FormState::Failed => "failed",
        }
    }

    /// Label for the submit control in this state.
    pub fn submit_label(&self, idle: &'static str) -> &'static str {
        match self {
            FormState::Submitting => "Submitting\u{2026}",
            _ => idle,
        }
    }
}

/// Tracks a single form's submit cycle:
/// `Editing -> Submitting -> Succeeded | Failed`, and back to `Submitting`
/// on retry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormFlow {
    state: FormState,
    /// Confirmation after success, or the error shown after failure.
    message: Option<String>,
}

impl FormFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Start a submission. Clears any previous outcome.
    pub fn begin_submit(&mut self) -> Result<(), HubError> {
        if self.state == FormState::Submitting {
            return Err(self.invalid(FormState::Submitting));
        }
        self.state = FormState::Submitting;
        self.message = None;
        Ok(())
    }

    /// Finish the in-flight submission successfully.
    pub fn succeed(&mut self, confirmation: impl Into<String>) -> Result<(), HubError> {
        self.finish(FormState::Succeeded, confirmation.into())
    }

    /// Finish the in-flight submission with a user-facing error.
    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), HubError> {
        self.finish(FormState::Failed, error.into())
    }

    /// Return to editing after an outcome has been shown.
    pub fn edit(&mut self) -> Result<(), HubError> {
        if self.state == FormState::Submitting {
            return Err(self.invalid(FormState::Editing));
        }
        self.state = FormState::Editing;
        self.message = None;
        Ok(())
    }

    pub fn confirmation(&self) -> Option<&str> {
        match self.state {
            FormState::Succeeded => self.message.as_deref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self.state {
            FormState::Failed => self.message.as_deref(),
            _ => None,
        }
    }

    fn finish(&mut self, to: FormState, message: String) -> Result<(), HubError> {
        if self.state != FormState::Submitting {
            return Err(self.invalid(to));
        }
        self.state = to;
        self.message = Some(message);
        Ok(())
    }

    fn invalid(&self, to: FormState) -> HubError {
        HubError::InvalidFormTransition {
            from: self.state.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut flow = FormFlow::new();
        assert_eq!(flow.state(), FormState::Editing);

        flow.begin_submit().unwrap();
        assert!(flow.is_submitting());

        flow.succeed("Thanks").unwrap();
        assert_eq!(flow.state(), FormState::Succeeded);
        assert_eq!(flow.confirmation(), Some("Thanks"));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut flow = FormFlow::new();
        flow.begin_submit().unwrap();
        assert!(matches!(
            flow.begin_submit(),
            Err(HubError::InvalidFormTransition { ref from, .. }) if from == "submitting"
        ));
    }

    #[test]
    fn test_outcome_requires_submission() {
        let mut flow = FormFlow::new();
        assert!(flow.succeed("x").is_err());
        assert!(flow.fail("x").is_err());
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut flow = FormFlow::new();
        flow.begin_submit().unwrap();
        flow.fail("Network error").unwrap();
        assert_eq!(flow.error(), Some("Network error"));

        flow.begin_submit().unwrap();
        assert_eq!(flow.error(), None);
        assert_eq!(flow.state(), FormState::Submitting);
    }

    #[test]
    fn test_edit() {
        let mut flow = FormFlow::new();
        flow.begin_submit().unwrap();
        assert!(flow.edit().is_err());
        flow.succeed("ok").unwrap();
        flow.edit().unwrap();
        assert_eq!(flow.state(), FormState::Editing);
        assert_eq!(flow.confirmation(), None);
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(FormState::Editing.submit_label("Send"), "Send");
        assert_eq!(FormState::Submitting.submit_label("Send"), "Submitting\u{2026}");
    }
}
