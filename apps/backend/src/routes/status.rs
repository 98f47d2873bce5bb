//! Session status endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> Result<Json<SessionStatus>> {
    Ok(Json(state.session()?.status()))
}
