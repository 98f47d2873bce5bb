//! Language names and the synthesis voices they map to.

use serde::{Deserialize, Serialize};

/// Language name that turns audio off for a pair.
pub const OTHER_LANGUAGE: &str = "other";

/// Voice selection sent to the synthesis provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    pub language_code: &'static str,
    pub name: &'static str,
}

const ENGLISH: Voice = Voice {
    language_code: "en-US",
    name: "en-US-Neural2-F",
};

const VOICES: [(&str, Voice); 5] = [
    ("english", ENGLISH),
    (
        "italian",
        Voice {
            language_code: "it-IT",
            name: "it-IT-Neural2-A",
        },
    ),
    (
        "french",
        Voice {
            language_code: "fr-FR",
            name: "fr-FR-Neural2-A",
        },
    ),
    (
        "spanish",
        Voice {
            language_code: "es-ES",
            name: "es-ES-Neural2-A",
        },
    ),
    (
        "german",
        Voice {
            language_code: "de-DE",
            name: "de-DE-Neural2-A",
        },
    ),
];

/// Voice for a language name; unknown names fall back to English.
pub fn voice_for(language: &str) -> Voice {
    let language = language.trim().to_lowercase();
    VOICES
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, voice)| *voice)
        .unwrap_or(ENGLISH)
}

/// The two column languages of a vocabulary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub first: String,
    pub second: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("english", "english")
    }
}

impl LanguagePair {
    /// Names are stored lowercased.
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.trim().to_lowercase(),
            second: second.trim().to_lowercase(),
        }
    }

    /// False when either side is `other`.
    pub fn speakable(&self) -> bool {
        self.first != OTHER_LANGUAGE && self.second != OTHER_LANGUAGE
    }
}
