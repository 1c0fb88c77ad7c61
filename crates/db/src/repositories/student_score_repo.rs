//! Repository for the `student_score` table.

use scoreboard_core::scoring::CreateScoreSubmission;
use sqlx::PgPool;

use crate::models::student_score::StudentScoreRow;

/// Column list for `student_score` queries.
const COLUMNS: &str = "\
    id, exam, student_name, kor_score, english_score, math_score, created_at";

/// Insert and list operations for raw score submissions.
pub struct StudentScoreRepo;

impl StudentScoreRepo {
    /// Insert a submission, returning the row with its generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateScoreSubmission,
    ) -> Result<StudentScoreRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_score (exam, student_name, kor_score, english_score, math_score) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentScoreRow>(&query)
            .bind(&input.exam)
            .bind(&input.student_name)
            .bind(input.kor_score)
            .bind(input.english_score)
            .bind(input.math_score)
            .fetch_one(pool)
            .await
    }

    /// List every submission, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StudentScoreRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_score ORDER BY id");
        sqlx::query_as::<_, StudentScoreRow>(&query)
            .fetch_all(pool)
            .await
    }
}
