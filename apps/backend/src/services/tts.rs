//! Google Cloud Text-to-Speech provider.
//!
//! Uses the REST `text:synthesize` endpoint with an API key taken from
//! `GOOGLE_TTS_API_KEY`. Audio comes back base64 encoded as MP3.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use vocab_core::{SynthesisError, Synthesizer, Voice};

const DEFAULT_BASE_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

#[derive(Clone)]
pub struct GoogleTtsSynthesizer {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsSynthesizer {
    pub fn new(api_key: String) -> Result<Self, SynthesisError> {
        if api_key.trim().is_empty() {
            return Err(SynthesisError::Provider("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SynthesisError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_body(text: &str, voice: &Voice) -> Value {
        json!({
            "input": { "text": text },
            "voice": {
                "languageCode": voice.language_code,
                "name": voice.name
            },
            "audioConfig": { "audioEncoding": "MP3" }
        })
    }

    fn decode_audio(body: &Value) -> Result<Vec<u8>, SynthesisError> {
        let content = body["audioContent"].as_str().ok_or_else(|| {
            SynthesisError::InvalidResponse("missing 'audioContent' field".to_string())
        })?;

        STANDARD
            .decode(content)
            .map_err(|e| SynthesisError::InvalidResponse(format!("bad audio encoding: {}", e)))
    }
}

impl std::fmt::Debug for GoogleTtsSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTtsSynthesizer")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Synthesizer for GoogleTtsSynthesizer {
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}?key={}", self.base_url, self.api_key);

        let response = self
            .client
            .post(&url)
            .json(&Self::request_body(text, voice))
            .send()
            .await
            .map_err(|e| SynthesisError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthesisError::Provider(format!("({}) {}", status, error_text)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        Self::decode_audio(&body)
    }

    fn provider_name(&self) -> &str {
        "Google TTS"
    }
}
