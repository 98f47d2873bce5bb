//! Pronunciation endpoints

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/play_audio
///
/// The session lock is released before synthesis starts, so other
/// requests keep flowing while the provider responds.
pub async fn play_audio(State(state): State<AppState>) -> Result<Json<Success<AudioResponse>>> {
    let request = {
        let session = state.session()?;
        session.request_audio()?
    };

    let clip = request.execute().await?;

    Ok(Json(Success::new(AudioResponse {
        audio: STANDARD.encode(&clip.bytes),
        message: "Audio generated successfully".to_string(),
        text: clip.text,
        language: clip.language,
        usage_info: clip.usage_info,
    })))
}

/// GET /api/usage_info
pub async fn usage_info(State(state): State<AppState>) -> Json<UsageSnapshot> {
    Json(state.meter.snapshot())
}
