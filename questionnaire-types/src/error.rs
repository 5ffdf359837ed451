/// Error type for a single state transition.
///
/// Every failure is local to the transition that raised it; the state is left
/// as it was before the intent was applied, except where noted.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A position-addressed operation pointed past the end of its collection.
    #[error("{target} index {index} is out of range (length {len})")]
    OutOfRange {
        target: &'static str,
        index: usize,
        len: usize,
    },

    /// The requested question kind does not exist.
    #[error("Unsupported question kind: {0}")]
    UnsupportedKind(String),

    /// An option operation targeted a free-text question.
    #[error("Question {question} has no options")]
    NotChoiceQuestion { question: usize },

    /// A free-text operation targeted a choice question.
    #[error("Question {question} is not a free-text question")]
    NotFreeText { question: usize },

    /// Removing the option would leave a choice question without options.
    #[error("Question {question} must keep at least one option")]
    LastOption { question: usize },

    /// A choice question was built or loaded with an empty option list.
    #[error("Choice question {prompt:?} has no options")]
    NoOptions { prompt: String },

    /// A question has no neighbour in the requested direction.
    #[error("Question {question} has no neighbour to swap with (length {len})")]
    NoNeighbour { question: usize, len: usize },

    /// The calendar date has no local midnight.
    #[error("No local midnight on {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Durable storage failed. The in-memory commit is kept.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// Build an `OutOfRange` error.
    pub fn out_of_range(target: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { target, index, len }
    }

    /// Check if this error came from durable storage.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

/// Error type for durable storage of the catalog.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The key-value store failed (I/O, quota, unavailable backend, etc.)
    #[error("Storage backend error: {0}")]
    Backend(anyhow::Error),

    /// The catalog could not be encoded.
    #[error("Failed to serialize catalog")]
    Serialization(#[source] serde_json::Error),

    /// The stored catalog could not be decoded.
    #[error("Failed to deserialize catalog")]
    Deserialization(#[source] serde_json::Error),
}

impl PersistenceError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}
