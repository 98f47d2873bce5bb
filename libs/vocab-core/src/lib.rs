//! Core vocabulary drill library shared by front-ends.
//!
//! Provides:
//! - Answer variant extraction for vocabulary cells (`go/went`, `go (went)`, ...)
//! - Vocabulary store built from two-column rows
//! - Monthly speech-synthesis usage metering
//! - Quiz session state machine
//! - Synthesizer trait and voice table

pub mod error;
pub mod language;
pub mod session;
pub mod store;
pub mod synth;
pub mod types;
pub mod usage;
pub mod variants;

pub use error::{QuizError, Result};
pub use language::{voice_for, LanguagePair, Voice};
pub use session::{QuizSession, DEFAULT_MAX_PASSES, DEFAULT_MAX_QUESTIONS};
pub use store::VocabularyStore;
pub use synth::{AudioClip, AudioRequest, MockMode, MockSynthesizer, SynthesisError, Synthesizer};
pub use types::{
    AnswerOutcome, LanguageSettings, Mode, PassOutcome, Question, QuizSummary, SessionStatus,
    Side, Turn, VocabularyEntry,
};
pub use usage::{
    Clock, JsonFileUsageStore, MemoryUsageStore, SystemClock, UsageMeter, UsageSnapshot,
    UsageState, UsageStore, UsageStoreError, DEFAULT_MONTHLY_CHAR_LIMIT,
};
pub use variants::parse_variants;
