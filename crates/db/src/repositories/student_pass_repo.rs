//! Repository for the `student_pass` table.

use scoreboard_core::scoring::CreateOutcomeRecord;
use sqlx::PgPool;

use crate::models::student_pass::StudentPassRow;

/// Column list for `student_pass` queries.
const COLUMNS: &str = "id, exam, student_name, avg_score, created_at";

/// Insert and list operations for pass records.
pub struct StudentPassRepo;

impl StudentPassRepo {
    /// Insert a pass record, returning the row with its generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOutcomeRecord,
    ) -> Result<StudentPassRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_pass (exam, student_name, avg_score) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentPassRow>(&query)
            .bind(&input.exam)
            .bind(&input.student_name)
            .bind(input.avg_score)
            .fetch_one(pool)
            .await
    }

    /// List every pass record in insertion (id) order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StudentPassRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_pass ORDER BY id");
        sqlx::query_as::<_, StudentPassRow>(&query)
            .fetch_all(pool)
            .await
    }
}
