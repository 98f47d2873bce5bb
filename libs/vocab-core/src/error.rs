//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Failures surfaced by quiz, vocabulary and audio operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No vocabulary loaded!")]
    EmptyVocabulary,

    #[error("No active question")]
    NoActiveQuestion,

    #[error("No active game")]
    NoActiveGame,

    #[error("No more passes available!")]
    NoPassesLeft,

    /// Audio disabled, quota exceeded or provider failure; the message says which.
    #[error("{0}")]
    AudioUnavailable(String),

    #[error("No valid data found")]
    NoValidRows,

    #[error("{0}")]
    Ingestion(String),
}

impl QuizError {
    /// Stable identifier used by front-ends.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyVocabulary => "empty_vocabulary",
            Self::NoActiveQuestion => "no_active_question",
            Self::NoActiveGame => "no_active_game",
            Self::NoPassesLeft => "no_passes_left",
            Self::AudioUnavailable(_) => "audio_unavailable",
            Self::NoValidRows => "no_valid_rows",
            Self::Ingestion(_) => "ingestion_error",
        }
    }
}
