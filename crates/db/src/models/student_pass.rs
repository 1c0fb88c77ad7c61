//! Row model for the `student_pass` table.

use scoreboard_core::scoring::StudentPass;
use scoreboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student_pass` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentPassRow {
    pub id: DbId,
    pub exam: String,
    pub student_name: String,
    pub avg_score: f64,
    pub created_at: Timestamp,
}

impl From<StudentPassRow> for StudentPass {
    fn from(row: StudentPassRow) -> Self {
        Self {
            id: row.id,
            exam: row.exam,
            student_name: row.student_name,
            avg_score: row.avg_score,
        }
    }
}
