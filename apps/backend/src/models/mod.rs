//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from vocab-core
pub use vocab_core::types::{
    AnswerOutcome, LanguageSettings, Mode, PassOutcome, Question, QuizSummary, SessionStatus,
    Turn,
};
pub use vocab_core::usage::UsageSnapshot;

// === Request Types ===

/// Language pair request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLanguagesRequest {
    #[serde(default)]
    pub first_language: String,
    #[serde(default)]
    pub second_language: String,
}

/// Rows already split into two cells by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRowsRequest {
    pub rows: Vec<(String, String)>,
}

/// Google Sheets link request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSheetRequest {
    #[serde(default)]
    pub url: String,
}

/// Start game request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameRequest {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub max_questions: Option<u32>,
    #[serde(default)]
    pub max_passes: Option<u32>,
}

/// Typed answer request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    #[serde(default)]
    pub answer: String,
}

// === Response Types ===

/// Successful response envelope: `{"success": true, ...body}`
#[derive(Debug, Clone, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// Vocabulary load result
#[derive(Debug, Clone, Serialize)]
pub struct LoadResponse {
    pub message: String,
    pub count: usize,
}

impl LoadResponse {
    pub fn new(count: usize) -> Self {
        Self {
            message: format!("Found {} items and saved successfully!", count),
            count,
        }
    }
}

/// Question or end-of-game summary
#[derive(Debug, Clone, Serialize)]
pub struct TurnResponse {
    pub game_active: bool,
    #[serde(flatten)]
    pub turn: Turn,
}

impl From<Turn> for TurnResponse {
    fn from(turn: Turn) -> Self {
        Self {
            game_active: !turn.is_finished(),
            turn,
        }
    }
}

/// Summary returned by an explicit end request
#[derive(Debug, Clone, Serialize)]
pub struct EndGameResponse {
    pub game_active: bool,
    #[serde(flatten)]
    pub summary: QuizSummary,
}

/// Revealed solution
#[derive(Debug, Clone, Serialize)]
pub struct SolutionResponse {
    pub solution: String,
    pub solution_visible: bool,
}

/// Solution visibility after hiding
#[derive(Debug, Clone, Serialize)]
pub struct HideSolutionResponse {
    pub solution_visible: bool,
}

/// Synthesized audio for the visible word
#[derive(Debug, Clone, Serialize)]
pub struct AudioResponse {
    /// Base64 encoded MP3
    pub audio: String,
    pub message: String,
    pub text: String,
    pub language: String,
    pub usage_info: UsageSnapshot,
}
