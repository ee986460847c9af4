//! Hub error types.

use thiserror::Error;

/// Errors raised while loading content or driving forms.
///
/// Directory queries themselves are infallible; nothing here is produced by
/// filtering or sorting.
#[derive(Error, Debug)]
pub enum HubError {
    /// Creator not found.
    #[error("Creator not found: {0}")]
    CreatorNotFound(String),

    /// Two records share the same identifier.
    #[error("Duplicate creator id: {0}")]
    DuplicateCreator(String),

    /// A record violates a data invariant.
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// A filter or sort option string did not name a known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    /// Invalid form state transition.
    #[error("Invalid form transition from {from} to {to}")]
    InvalidFormTransition { from: String, to: String },

    /// Required form fields are missing or malformed.
    #[error("Form incomplete: {0}")]
    FormIncomplete(String),

    /// The remote endpoint rejected or failed the submission. The message is
    /// suitable for showing to the user.
    #[error("{0}")]
    Submission(String),

    /// Reading a dataset from disk failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HubError {
    fn from(e: serde_json::Error) -> Self {
        HubError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for HubError {
    fn from(e: std::io::Error) -> Self {
        HubError::Io(e.to_string())
    }
}
