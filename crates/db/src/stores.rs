//! PostgreSQL-backed implementations of the `scoreboard_core` store traits.

use async_trait::async_trait;
use scoreboard_core::error::CoreError;
use scoreboard_core::scoring::{
    CreateOutcomeRecord, CreateScoreSubmission, ScoreSubmission, ScoreSubmissionStore,
    StudentFail, StudentFailStore, StudentPass, StudentPassStore,
};

use crate::repositories::{StudentFailRepo, StudentPassRepo, StudentScoreRepo};
use crate::DbPool;

/// All three score collections over one connection pool.
///
/// The same value is handed to the service once per trait; writes are not
/// shared across a transaction.
#[derive(Debug, Clone)]
pub struct PgScoreStores {
    pool: DbPool,
}

impl PgScoreStores {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl ScoreSubmissionStore for PgScoreStores {
    async fn save(&self, input: CreateScoreSubmission) -> Result<ScoreSubmission, CoreError> {
        let row = StudentScoreRepo::create(&self.pool, &input)
            .await
            .map_err(storage_error)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<ScoreSubmission>, CoreError> {
        let rows = StudentScoreRepo::list_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}

#[async_trait]
impl StudentPassStore for PgScoreStores {
    async fn save(&self, input: CreateOutcomeRecord) -> Result<StudentPass, CoreError> {
        let row = StudentPassRepo::create(&self.pool, &input)
            .await
            .map_err(storage_error)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<StudentPass>, CoreError> {
        let rows = StudentPassRepo::list_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl StudentFailStore for PgScoreStores {
    async fn save(&self, input: CreateOutcomeRecord) -> Result<StudentFail, CoreError> {
        let row = StudentFailRepo::create(&self.pool, &input)
            .await
            .map_err(storage_error)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<StudentFail>, CoreError> {
        let rows = StudentFailRepo::list_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
