//! Score submission and pass/fail list queries.

use std::sync::Arc;

use crate::error::CoreError;
use crate::scoring::classification::{classify, Classification, Verdict};
use crate::scoring::model::{CreateOutcomeRecord, CreateScoreSubmission, ExamStudent};
use crate::scoring::store::{ScoreSubmissionStore, StudentFailStore, StudentPassStore};

/// Persists submissions and their single pass/fail outcome.
///
/// Stores are injected at construction. The service owns the decision of
/// which outcome collection receives a write; the stores know nothing about
/// each other.
#[derive(Clone)]
pub struct ScoreService {
    submissions: Arc<dyn ScoreSubmissionStore>,
    passes: Arc<dyn StudentPassStore>,
    fails: Arc<dyn StudentFailStore>,
}

impl ScoreService {
    pub fn new(
        submissions: Arc<dyn ScoreSubmissionStore>,
        passes: Arc<dyn StudentPassStore>,
        fails: Arc<dyn StudentFailStore>,
    ) -> Self {
        Self {
            submissions,
            passes,
            fails,
        }
    }

    /// Save a submission, then exactly one pass or fail record.
    ///
    /// The two writes are sequential and not transactional: if the outcome
    /// write fails the submission row stays behind. Repeated calls with the
    /// same arguments create new rows each time.
    pub async fn save_score(
        &self,
        exam: &str,
        student_name: &str,
        kor_score: i32,
        english_score: i32,
        math_score: i32,
    ) -> Result<Classification, CoreError> {
        let submission = self
            .submissions
            .save(CreateScoreSubmission {
                exam: exam.to_string(),
                student_name: student_name.to_string(),
                kor_score,
                english_score,
                math_score,
            })
            .await?;

        let classification = classify(kor_score, english_score, math_score);
        let outcome = CreateOutcomeRecord {
            exam: exam.to_string(),
            student_name: student_name.to_string(),
            avg_score: classification.avg_score,
        };

        let outcome_id = match classification.verdict {
            Verdict::Pass => self.passes.save(outcome).await?.id,
            Verdict::Fail => self.fails.save(outcome).await?.id,
        };

        tracing::info!(
            exam,
            student_name,
            submission_id = submission.id,
            outcome_id,
            avg_score = classification.avg_score,
            verdict = ?classification.verdict,
            "Score saved",
        );

        Ok(classification)
    }

    /// Students who passed `exam`, in store order.
    pub async fn get_pass_students_list(&self, exam: &str) -> Result<Vec<ExamStudent>, CoreError> {
        let passes = self.passes.find_all().await?;

        Ok(passes
            .into_iter()
            .filter(|pass| pass.exam == exam)
            .map(ExamStudent::from)
            .collect())
    }

    /// Students who failed `exam`, in store order.
    pub async fn get_fail_students_list(&self, exam: &str) -> Result<Vec<ExamStudent>, CoreError> {
        let fails = self.fails.find_all().await?;

        Ok(fails
            .into_iter()
            .filter(|fail| fail.exam == exam)
            .map(ExamStudent::from)
            .collect())
    }

    pub async fn health_check(&self) -> Result<(), CoreError> {
        self.submissions.ping().await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
