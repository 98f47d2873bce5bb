//! Game flow endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/start_game
pub async fn start_game(
    State(state): State<AppState>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<Success<TurnResponse>>> {
    let max_questions = request.max_questions.unwrap_or(state.defaults.max_questions);
    let max_passes = request.max_passes.unwrap_or(state.defaults.max_passes);

    if max_questions == 0 {
        return Err(ApiError::BadRequest(
            "max_questions must be at least 1".to_string(),
        ));
    }

    let turn = state
        .session()?
        .start(request.mode, max_questions, max_passes)?;
    Ok(Json(Success::new(turn.into())))
}

/// GET /api/next_question
pub async fn next_question(State(state): State<AppState>) -> Result<Json<Success<TurnResponse>>> {
    let turn = state.session()?.next_question()?;
    Ok(Json(Success::new(turn.into())))
}

/// POST /api/show_solution
pub async fn show_solution(
    State(state): State<AppState>,
) -> Result<Json<Success<SolutionResponse>>> {
    let solution = state.session()?.reveal_solution()?;
    Ok(Json(Success::new(SolutionResponse {
        solution,
        solution_visible: true,
    })))
}

/// POST /api/hide_solution
pub async fn hide_solution(
    State(state): State<AppState>,
) -> Result<Json<Success<HideSolutionResponse>>> {
    state.session()?.hide_solution();
    Ok(Json(Success::new(HideSolutionResponse {
        solution_visible: false,
    })))
}

/// POST /api/check_answer
pub async fn check_answer(
    State(state): State<AppState>,
    Json(request): Json<CheckAnswerRequest>,
) -> Result<Json<Success<AnswerOutcome>>> {
    let outcome = state.session()?.submit_answer(&request.answer)?;
    Ok(Json(Success::new(outcome)))
}

/// POST /api/pass_question
pub async fn pass_question(State(state): State<AppState>) -> Result<Json<Success<PassOutcome>>> {
    let outcome = state.session()?.pass_question()?;
    Ok(Json(Success::new(outcome)))
}

/// POST /api/end_game
pub async fn end_game(State(state): State<AppState>) -> Result<Json<Success<EndGameResponse>>> {
    let summary = state.session()?.end()?;
    Ok(Json(Success::new(EndGameResponse {
        game_active: false,
        summary,
    })))
}
