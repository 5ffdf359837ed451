//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for authoring questionnaires:
//! - `Questionnaire` and `Status` - A committed questionnaire and its lifecycle
//! - `Question` and `QuestionKind` - Individual questions and their kinds
//! - `ScheduledAt` - The date a questionnaire is scheduled for
//! - `StoreError` and `PersistenceError` - Failures of a single transition
//! - `KeyValueStore` trait - For implementing durable storage

mod question;
pub use question::{
    ChoiceQuestion, DEFAULT_MULTI_CHOICE_PROMPT, DEFAULT_SINGLE_CHOICE_PROMPT, FreeTextQuestion,
    Question, QuestionKind, option_label,
};

mod questionnaire;
pub use questionnaire::{Questionnaire, Status};

mod scheduled_at;
pub use scheduled_at::ScheduledAt;

mod error;
pub use error::{PersistenceError, StoreError};

mod traits;
pub use traits::KeyValueStore;
