//! Row model for the `student_score` table.

use scoreboard_core::scoring::ScoreSubmission;
use scoreboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student_score` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentScoreRow {
    pub id: DbId,
    pub exam: String,
    pub student_name: String,
    pub kor_score: i32,
    pub english_score: i32,
    pub math_score: i32,
    pub created_at: Timestamp,
}

impl From<StudentScoreRow> for ScoreSubmission {
    fn from(row: StudentScoreRow) -> Self {
        Self {
            id: row.id,
            exam: row.exam,
            student_name: row.student_name,
            kor_score: row.kor_score,
            english_score: row.english_score,
            math_score: row.math_score,
        }
    }
}
