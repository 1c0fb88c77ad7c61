//! Handlers for exam score submission and pass/fail lists.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scoreboard_core::error::CoreError;
use scoreboard_core::scoring::ExamStudent;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `PUT /exam/{exam}/score`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveExamScoreRequest {
    pub student_name: String,
    pub kor_score: i32,
    pub english_score: i32,
    pub math_score: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// PUT /exam/{exam}/score
///
/// Store one student's scores. Responds `200` with an empty body; the
/// pass/fail verdict is only visible through the list endpoints.
pub async fn save_score(
    State(state): State<AppState>,
    Path(exam): Path<String>,
    payload: Result<Json<SaveExamScoreRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    validate_not_blank("exam", &exam)?;
    validate_not_blank("studentName", &input.student_name)?;

    state
        .score_service
        .save_score(
            &exam,
            &input.student_name,
            input.kor_score,
            input.english_score,
            input.math_score,
        )
        .await?;

    Ok(StatusCode::OK)
}

/// GET /exam/{exam}/pass
pub async fn list_pass_students(
    State(state): State<AppState>,
    Path(exam): Path<String>,
) -> AppResult<Json<Vec<ExamStudent>>> {
    let students = state.score_service.get_pass_students_list(&exam).await?;

    Ok(Json(students))
}

/// GET /exam/{exam}/fail
pub async fn list_fail_students(
    State(state): State<AppState>,
    Path(exam): Path<String>,
) -> AppResult<Json<Vec<ExamStudent>>> {
    let students = state.score_service.get_fail_students_list(&exam).await?;

    Ok(Json(students))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be blank"
        ))));
    }
    Ok(())
}
