//! Repository for the `student_fail` table.

use scoreboard_core::scoring::CreateOutcomeRecord;
use sqlx::PgPool;

use crate::models::student_fail::StudentFailRow;

/// Column list for `student_fail` queries.
const COLUMNS: &str = "id, exam, student_name, avg_score, created_at";

/// Insert and list operations for fail records.
pub struct StudentFailRepo;

impl StudentFailRepo {
    /// Insert a fail record, returning the row with its generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOutcomeRecord,
    ) -> Result<StudentFailRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_fail (exam, student_name, avg_score) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentFailRow>(&query)
            .bind(&input.exam)
            .bind(&input.student_name)
            .bind(input.avg_score)
            .fetch_one(pool)
            .await
    }

    /// List every fail record in insertion (id) order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StudentFailRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_fail ORDER BY id");
        sqlx::query_as::<_, StudentFailRow>(&query)
            .fetch_all(pool)
            .await
    }
}
