//! Store contracts for submissions and outcome records.
//!
//! Each collection is append-only: the service can only `save` and
//! `find_all`. Implementations assign ids that are unique and
//! non-decreasing within their collection, and `find_all` returns rows in
//! a stable order (ascending id).

use async_trait::async_trait;

use crate::error::CoreError;
use crate::scoring::model::{
    CreateOutcomeRecord, CreateScoreSubmission, ScoreSubmission, StudentFail, StudentPass,
};

#[async_trait]
pub trait ScoreSubmissionStore: Send + Sync {
    async fn save(&self, input: CreateScoreSubmission) -> Result<ScoreSubmission, CoreError>;

    async fn find_all(&self) -> Result<Vec<ScoreSubmission>, CoreError>;

    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[async_trait]
pub trait StudentPassStore: Send + Sync {
    async fn save(&self, input: CreateOutcomeRecord) -> Result<StudentPass, CoreError>;

    async fn find_all(&self) -> Result<Vec<StudentPass>, CoreError>;
}

#[async_trait]
pub trait StudentFailStore: Send + Sync {
    async fn save(&self, input: CreateOutcomeRecord) -> Result<StudentFail, CoreError>;

    async fn find_all(&self) -> Result<Vec<StudentFail>, CoreError>;
}
