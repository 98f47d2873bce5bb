//! Language and vocabulary loading endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::ingest::{self, Rows};
use crate::AppState;

/// POST /api/set_languages
pub async fn set_languages(
    State(state): State<AppState>,
    Json(request): Json<SetLanguagesRequest>,
) -> Result<Json<Success<LanguageSettings>>> {
    let settings = state
        .session()?
        .set_languages(&request.first_language, &request.second_language);

    tracing::info!(
        first = %settings.first_language,
        second = %settings.second_language,
        audio_enabled = settings.audio_enabled,
        "Languages set"
    );
    Ok(Json(Success::new(settings)))
}

/// POST /api/load_rows
pub async fn load_rows(
    State(state): State<AppState>,
    Json(request): Json<LoadRowsRequest>,
) -> Result<Json<Success<LoadResponse>>> {
    store_rows(&state, request.rows)
}

/// POST /api/load_csv and /api/load_excel (multipart field `file`)
///
/// Accepts `.csv`, `.xlsx` and `.xls` uploads.
pub async fn load_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Success<LoadResponse>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ApiError::BadRequest("No file selected".to_string()));
        }

        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let rows = ingest::parse_upload(&filename, &content)?;
        return store_rows(&state, rows);
    }

    Err(ApiError::BadRequest("No file uploaded".to_string()))
}

/// POST /api/load_google_sheet
pub async fn load_google_sheet(
    State(state): State<AppState>,
    Json(request): Json<LoadSheetRequest>,
) -> Result<Json<Success<LoadResponse>>> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(ApiError::BadRequest("URL missing".to_string()));
    }

    let rows = ingest::load_google_sheet(&state.http, url).await?;
    store_rows(&state, rows)
}

fn store_rows(state: &AppState, rows: Rows) -> Result<Json<Success<LoadResponse>>> {
    let count = state.session()?.load_vocabulary(rows)?;
    Ok(Json(Success::new(LoadResponse::new(count))))
}
