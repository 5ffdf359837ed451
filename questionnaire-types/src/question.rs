use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Prompt given to a freshly added single-choice question.
pub const DEFAULT_SINGLE_CHOICE_PROMPT: &str = "Single choice";

/// Prompt given to a freshly added multi-choice question.
pub const DEFAULT_MULTI_CHOICE_PROMPT: &str = "Multiple choice";

/// Label for the option at 1-based position `n`.
pub fn option_label(n: usize) -> String {
    format!("Option{n}")
}

/// A single question in a questionnaire.
///
/// Questions carry no identity of their own; they are addressed by their
/// position in the owning question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Question {
    /// Pick exactly one option.
    SingleChoice(ChoiceQuestion),

    /// Pick any number of options.
    MultiChoice(ChoiceQuestion),

    /// Answer in free text.
    FreeText(FreeTextQuestion),
}

impl Question {
    /// Create a question of the given kind with its default prompt and options.
    pub fn new(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::SingleChoice => Self::SingleChoice(ChoiceQuestion::with_default_options(
                DEFAULT_SINGLE_CHOICE_PROMPT,
                2,
            )),
            QuestionKind::MultiChoice => Self::MultiChoice(ChoiceQuestion::with_default_options(
                DEFAULT_MULTI_CHOICE_PROMPT,
                4,
            )),
            QuestionKind::FreeText => Self::FreeText(FreeTextQuestion::default()),
        }
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::SingleChoice(_) => QuestionKind::SingleChoice,
            Self::MultiChoice(_) => QuestionKind::MultiChoice,
            Self::FreeText(_) => QuestionKind::FreeText,
        }
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        match self {
            Self::SingleChoice(choice) | Self::MultiChoice(choice) => &choice.prompt,
            Self::FreeText(text) => &text.prompt,
        }
    }

    /// Replace the prompt text.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        match self {
            Self::SingleChoice(choice) | Self::MultiChoice(choice) => choice.prompt = prompt.into(),
            Self::FreeText(text) => text.prompt = prompt.into(),
        }
    }

    /// Check if this is a free-text question.
    pub fn is_free_text(&self) -> bool {
        matches!(self, Self::FreeText(_))
    }

    /// Get the options of a choice question.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::SingleChoice(choice) | Self::MultiChoice(choice) => Some(&choice.options),
            Self::FreeText(_) => None,
        }
    }

    /// Get a mutable reference to the options of a choice question.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Self::SingleChoice(choice) | Self::MultiChoice(choice) => Some(&mut choice.options),
            Self::FreeText(_) => None,
        }
    }

    /// Whether a free-text question must be answered. `None` for choice questions.
    pub fn is_required(&self) -> Option<bool> {
        match self {
            Self::FreeText(text) => Some(text.is_required),
            _ => None,
        }
    }
}

/// Configuration for a single- or multi-choice question.
///
/// Deserialization rejects an empty option list, as does [`ChoiceQuestion::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawChoiceQuestion")]
pub struct ChoiceQuestion {
    /// The prompt text shown to respondents.
    pub prompt: String,

    /// Option labels, in display order. At least one.
    pub options: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChoiceQuestion {
    prompt: String,
    options: Vec<String>,
}

impl TryFrom<RawChoiceQuestion> for ChoiceQuestion {
    type Error = StoreError;

    fn try_from(raw: RawChoiceQuestion) -> Result<Self, Self::Error> {
        Self::new(raw.prompt, raw.options)
    }
}

impl ChoiceQuestion {
    /// Create a choice question with explicit options.
    ///
    /// Fails with [`StoreError::NoOptions`] if `options` is empty.
    pub fn new(prompt: impl Into<String>, options: Vec<String>) -> Result<Self, StoreError> {
        let prompt = prompt.into();
        if options.is_empty() {
            return Err(StoreError::NoOptions { prompt });
        }
        Ok(Self { prompt, options })
    }

    /// Create a choice question with `count` default-labelled options.
    ///
    /// A `count` of zero still yields one option.
    pub fn with_default_options(prompt: impl Into<String>, count: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: (1..=count.max(1)).map(option_label).collect(),
        }
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeTextQuestion {
    /// The prompt text shown to respondents.
    pub prompt: String,

    /// Whether respondents must answer.
    pub is_required: bool,
}

impl FreeTextQuestion {
    /// Create a free-text question.
    pub fn new(prompt: impl Into<String>, is_required: bool) -> Self {
        Self {
            prompt: prompt.into(),
            is_required,
        }
    }
}

/// The kind of a question, without its content.
///
/// Named the same way as the `kind` tag of a stored [`Question`]. The legacy
/// names `radio`, `checkbox` and `text` are accepted as aliases when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    FreeText,
}

impl QuestionKind {
    /// All kinds, in menu order.
    pub const ALL: [QuestionKind; 3] = [Self::SingleChoice, Self::MultiChoice, Self::FreeText];

    /// The canonical name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "singleChoice",
            Self::MultiChoice => "multiChoice",
            Self::FreeText => "freeText",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singleChoice" | "radio" => Ok(Self::SingleChoice),
            "multiChoice" | "checkbox" => Ok(Self::MultiChoice),
            "freeText" | "text" => Ok(Self::FreeText),
            other => Err(StoreError::UnsupportedKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for QuestionKind {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionKind> for &'static str {
    fn from(kind: QuestionKind) -> Self {
        kind.as_str()
    }
}
