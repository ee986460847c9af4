use crate::ids::FaqId;
use serde::{Deserialize, Serialize};

/// A question and answer shown on the home and contact pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqItem {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}
