//! Row model for the `student_fail` table.

use scoreboard_core::scoring::StudentFail;
use scoreboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student_fail` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentFailRow {
    pub id: DbId,
    pub exam: String,
    pub student_name: String,
    pub avg_score: f64,
    pub created_at: Timestamp,
}

impl From<StudentFailRow> for StudentFail {
    fn from(row: StudentFailRow) -> Self {
        Self {
            id: row.id,
            exam: row.exam,
            student_name: row.student_name,
            avg_score: row.avg_score,
        }
    }
}
