// crates/suggest-core/src/error.rs
use thiserror::Error;

/// Errors raised while building or loading a [`Catalog`](crate::Catalog),
/// plus rejected requests for callers that funnel everything into one type.
///
/// Scoring itself never fails.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A catalog record violates a precondition the scorer relies on
    /// (positive population, non-empty ascii name, usable coordinates).
    #[error("bad catalog record #{line}: {reason}")]
    DataIntegrity { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SuggestError>;

/// Outcome of checking a [`SuggestionRequest`](crate::SuggestionRequest).
///
/// These are user-input problems. They gate whether a lookup runs at all and
/// never travel through the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("query is mandatory!")]
    MissingQuery,

    #[error("lat or long missing")]
    InconsistentCoordinates,

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}
