//! Route definitions for exam scores.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::exam;
use crate::state::AppState;

/// Exam routes mounted at `/exam`.
///
/// ```text
/// PUT    /{exam}/score      -> save_score
/// GET    /{exam}/pass       -> list_pass_students
/// GET    /{exam}/fail       -> list_fail_students
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{exam}/score", put(exam::save_score))
        .route("/{exam}/pass", get(exam::list_pass_students))
        .route("/{exam}/fail", get(exam::list_fail_students))
}
