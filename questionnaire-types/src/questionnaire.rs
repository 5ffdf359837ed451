use serde::{Deserialize, Serialize};

use crate::{Question, ScheduledAt};

/// Lifecycle of a committed questionnaire.
///
/// `Unreleased --release--> Released --(external)--> Closed`. Nothing in this
/// workspace produces `Closed`; it is accepted when loading persisted data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unreleased,
    Released,
    Closed,
}

impl Status {
    /// Check if respondents can currently see the questionnaire.
    pub fn is_released(self) -> bool {
        self == Self::Released
    }
}

/// A committed questionnaire, as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    /// Title shown in the catalog and at the top of the form.
    pub title: String,

    /// Date the questionnaire is scheduled for.
    pub scheduled_at: ScheduledAt,

    /// Where the questionnaire is in its lifecycle.
    pub status: Status,

    /// Questions, in display order.
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// Create an unreleased questionnaire.
    pub fn new(title: impl Into<String>, scheduled_at: ScheduledAt, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            scheduled_at,
            status: Status::Unreleased,
            questions,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Check if the questionnaire has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
