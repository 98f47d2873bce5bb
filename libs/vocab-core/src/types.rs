//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};

use crate::usage::UsageSnapshot;
use crate::variants::parse_variants;

/// Which column is shown as the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Show the first column, expect the second.
    #[serde(rename = "first_second")]
    SourceToTarget,
    /// Show the second column, expect the first.
    #[serde(rename = "second_first")]
    TargetToSource,
}

impl Default for Mode {
    fn default() -> Self {
        Self::SourceToTarget
    }
}

impl Mode {
    /// Get the mode name as used by front-ends.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceToTarget => "first_second",
            Self::TargetToSource => "second_first",
        }
    }

    /// Parse from the front-end name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_second" => Some(Self::SourceToTarget),
            "second_first" => Some(Self::TargetToSource),
            _ => None,
        }
    }
}

/// One side of a vocabulary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

/// A parsed vocabulary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub source_display: String,
    pub target_display: String,
    pub source_variants: Vec<String>,
    pub target_variants: Vec<String>,
    pub source_main: String,
    pub target_main: String,
}

impl VocabularyEntry {
    /// Build an entry from two trimmed, non-empty cells.
    pub fn new(source: &str, target: &str) -> Self {
        let source_variants = variants_or_display(source);
        let target_variants = variants_or_display(target);

        Self {
            source_display: source.to_string(),
            target_display: target.to_string(),
            source_main: source_variants[0].clone(),
            target_main: target_variants[0].clone(),
            source_variants,
            target_variants,
        }
    }

    /// Raw cell text for a side.
    pub fn display(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_display,
            Side::Target => &self.target_display,
        }
    }

    /// First variant for a side; the word spoken by audio.
    pub fn main(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_main,
            Side::Target => &self.target_main,
        }
    }

    pub fn variants(&self, side: Side) -> &[String] {
        match side {
            Side::Source => &self.source_variants,
            Side::Target => &self.target_variants,
        }
    }

    /// Case- and whitespace-insensitive membership in a side's variants.
    pub fn accepts(&self, side: Side, typed: &str) -> bool {
        let typed = typed.trim().to_lowercase();
        self.variants(side).iter().any(|v| v.to_lowercase() == typed)
    }
}

fn variants_or_display(cell: &str) -> Vec<String> {
    let variants = parse_variants(cell);
    if variants.is_empty() {
        vec![cell.to_string()]
    } else {
        variants
    }
}

/// A question served to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Display text of the question side.
    pub text: String,
    /// Instruction line plus the quoted text.
    pub prompt: String,
    pub question_type: Mode,
    pub score: i64,
    pub questions_asked: u32,
    pub max_questions: u32,
    pub passes_left: u32,
    pub audio_enabled: bool,
    pub solution_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_info: Option<UsageSnapshot>,
}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub final_score: i64,
    pub questions_asked: u32,
    /// Score over questions asked, in percent, rounded to one decimal.
    pub percentage: f64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_info: Option<UsageSnapshot>,
}

/// Result of advancing the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Turn {
    Question(Question),
    Finished(QuizSummary),
}

impl Turn {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Result of checking a typed answer. A wrong answer is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub score: i64,
    pub solution_visible: bool,
}

/// Result of skipping a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOutcome {
    pub message: String,
    pub passes_left: u32,
    pub solution: String,
    pub solution_visible: bool,
}

/// Language pair and whether audio is available for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSettings {
    pub first_language: String,
    pub second_language: String,
    pub audio_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_info: Option<UsageSnapshot>,
}

/// Read-only view of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub game_active: bool,
    pub vocabulary_count: usize,
    pub score: i64,
    pub questions_asked: u32,
    pub passes_left: u32,
    pub max_passes: u32,
    pub audio_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_info: Option<UsageSnapshot>,
}
