use serde::{Deserialize, Serialize};

use questionnaire_types::QuestionKind;

/// Direction to move a question in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the list (-1).
    Up,
    /// Towards the end of the list (+1).
    Down,
}

impl Direction {
    /// The position offset this direction moves by.
    pub fn offset(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// Something the UI asks the core to do.
///
/// Serialized as `{ "type": "ADD_QUESTION", "payload": { ... } }` so a UI
/// layer can dispatch intents as plain JSON actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Start a blank draft that will be appended to the catalog.
    BeginNew,

    /// Start editing a copy of a catalog entry.
    BeginEdit { index: usize },

    /// Replace the draft title.
    SetTitle { title: String },

    /// Flip the draft's audience classification.
    ChooseAudienceType,

    /// Legacy text-edit entry point; see [`crate::Draft::start_text_edit`].
    StartTextEdit {
        question: Option<usize>,
        option: Option<usize>,
        content: String,
    },

    /// Open the text editor on a title, prompt or option.
    OpenTextEditor {
        question: Option<usize>,
        option: Option<usize>,
        content: String,
    },

    /// Write text straight into a free-text question.
    SetFreeTextAnswer { question: usize, content: String },

    /// Commit the editor content at the cursor and close the editor.
    CommitTextEdit { content: String },

    AddQuestion { kind: QuestionKind },
    RemoveQuestion { index: usize },
    ShiftQuestion { index: usize, direction: Direction },
    CopyQuestion { index: usize },
    AddOption { question: usize },
    RemoveOption { question: usize, option: usize },
    ToggleRequired { question: usize },

    /// Schedule the draft for local midnight on a date. `month` is 1-based.
    SetScheduledAt { year: i32, month: u32, day: u32 },

    /// Commit the draft to the catalog as unreleased.
    Save,

    /// Commit the draft to the catalog as released.
    Release,

    /// Delete a catalog entry.
    Remove { index: usize },
}
