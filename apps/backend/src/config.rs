//! Runtime configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use vocab_core::{DEFAULT_MAX_PASSES, DEFAULT_MAX_QUESTIONS, DEFAULT_MONTHLY_CHAR_LIMIT};

/// Server configuration.
///
/// Env vars (all optional):
/// - HOST, PORT: listen address (default 0.0.0.0:5000)
/// - USAGE_FILE: usage counter JSON file
/// - TTS_MONTHLY_CHAR_LIMIT: synthesis quota per month
/// - GOOGLE_TTS_API_KEY: enables audio when set
/// - DEFAULT_MAX_QUESTIONS, DEFAULT_MAX_PASSES: game defaults
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub usage_file: PathBuf,
    pub monthly_char_limit: u64,
    pub google_tts_api_key: Option<String>,
    pub defaults: GameDefaults,
}

/// Values used when a start request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDefaults {
    pub max_questions: u32,
    pub max_passes: u32,
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 5000)?;

        let usage_file = std::env::var("USAGE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_usage_file());

        let google_tts_api_key = std::env::var("GOOGLE_TTS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            host,
            port,
            usage_file,
            monthly_char_limit: parse_var("TTS_MONTHLY_CHAR_LIMIT", DEFAULT_MONTHLY_CHAR_LIMIT)?,
            google_tts_api_key,
            defaults: GameDefaults {
                max_questions: parse_var("DEFAULT_MAX_QUESTIONS", DEFAULT_MAX_QUESTIONS)?,
                max_passes: parse_var("DEFAULT_MAX_PASSES", DEFAULT_MAX_PASSES)?,
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_usage_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-drill")
        .join("google_tts_usage.json")
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", name, value)),
        Err(_) => Ok(default),
    }
}
