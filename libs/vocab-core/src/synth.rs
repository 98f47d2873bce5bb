//! Speech synthesis seam and detached audio requests.
//!
//! The session decides *what* to speak and *in which voice*; a
//! [`Synthesizer`] implementation produces the audio bytes. Synthesis runs
//! outside the session, so a slow provider never holds up answering or
//! advancing.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::error::{QuizError, Result};
use crate::language::Voice;
use crate::usage::{UsageMeter, UsageSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("network error: {0}")]
    Network(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// External text-to-speech capability.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Render `text` in `voice`, returning encoded audio (MP3).
    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
    ) -> std::result::Result<Vec<u8>, SynthesisError>;

    fn provider_name(&self) -> &str;
}

/// Audio produced for the current word.
#[derive(Debug, Clone, Serialize)]
pub struct AudioClip {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub text: String,
    pub language: String,
    pub usage_info: UsageSnapshot,
}

/// A synthesis job captured from the session at request time.
///
/// Holds no reference to the session: running it can only touch the usage
/// meter.
pub struct AudioRequest {
    pub text: String,
    pub language: String,
    pub voice: Voice,
    meter: Arc<UsageMeter>,
    synthesizer: Arc<dyn Synthesizer>,
}

impl std::fmt::Debug for AudioRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioRequest")
            .field("text", &self.text)
            .field("language", &self.language)
            .field("voice", &self.voice)
            .field("provider", &self.synthesizer.provider_name())
            .finish()
    }
}

impl AudioRequest {
    pub(crate) fn new(
        text: String,
        language: String,
        voice: Voice,
        meter: Arc<UsageMeter>,
        synthesizer: Arc<dyn Synthesizer>,
    ) -> Self {
        Self {
            text,
            language,
            voice,
            meter,
            synthesizer,
        }
    }

    /// Characters charged against the quota.
    pub fn char_count(&self) -> u64 {
        self.text.chars().count() as u64
    }

    /// Check quota, synthesize, and record usage on success.
    pub async fn execute(self) -> Result<AudioClip> {
        let chars = self.char_count();
        self.meter.ensure_available(chars)?;

        let bytes = self
            .synthesizer
            .synthesize(&self.text, &self.voice)
            .await
            .map_err(|e| {
                tracing::error!(provider = self.synthesizer.provider_name(), "TTS error: {}", e);
                QuizError::AudioUnavailable(format!("Audio generation failed: {}", e))
            })?;

        if bytes.is_empty() {
            return Err(QuizError::AudioUnavailable(
                "No audio content received".to_string(),
            ));
        }

        self.meter.consume(chars);

        Ok(AudioClip {
            bytes,
            text: self.text,
            language: self.language,
            usage_info: self.meter.snapshot(),
        })
    }

    /// Run on the tokio runtime; the handle yields the structured result.
    pub fn spawn(self) -> JoinHandle<Result<AudioClip>> {
        tokio::spawn(self.execute())
    }
}

/// Behaviour of a [`MockSynthesizer`].
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return these bytes.
    Audio(Vec<u8>),
    /// Return an empty payload.
    Empty,
    /// Fail with a provider error.
    Error(String),
}

/// Deterministic synthesizer that records every call.
#[derive(Debug)]
pub struct MockSynthesizer {
    mode: MockMode,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockSynthesizer {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(text, language_code)` of each call, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new(MockMode::Audio(b"ID3mock".to_vec()))
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
    ) -> std::result::Result<Vec<u8>, SynthesisError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((text.to_string(), voice.language_code.to_string()));

        match &self.mode {
            MockMode::Audio(bytes) => Ok(bytes.clone()),
            MockMode::Empty => Ok(Vec::new()),
            MockMode::Error(msg) => Err(SynthesisError::Provider(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Synthesizer"
    }
}
