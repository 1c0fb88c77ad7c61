//! Submission and outcome records.
//!
//! Records are immutable once a store returns them; the `Create*` DTOs carry
//! everything except the store-assigned `id`.

use serde::Serialize;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One student's raw subject scores for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSubmission {
    pub id: DbId,
    pub exam: String,
    pub student_name: String,
    pub kor_score: i32,
    pub english_score: i32,
    pub math_score: i32,
}

/// Outcome record for a submission whose average reached the pass threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentPass {
    pub id: DbId,
    pub exam: String,
    pub student_name: String,
    pub avg_score: f64,
}

/// Outcome record for a submission whose average fell below the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentFail {
    pub id: DbId,
    pub exam: String,
    pub student_name: String,
    pub avg_score: f64,
}

/// `(studentName, avgScore)` projection returned by the list queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamStudent {
    pub student_name: String,
    pub avg_score: f64,
}

impl From<StudentPass> for ExamStudent {
    fn from(pass: StudentPass) -> Self {
        Self {
            student_name: pass.student_name,
            avg_score: pass.avg_score,
        }
    }
}

impl From<StudentFail> for ExamStudent {
    fn from(fail: StudentFail) -> Self {
        Self {
            student_name: fail.student_name,
            avg_score: fail.avg_score,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for persisting a new score submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScoreSubmission {
    pub exam: String,
    pub student_name: String,
    pub kor_score: i32,
    pub english_score: i32,
    pub math_score: i32,
}

/// DTO for persisting a pass or fail outcome record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcomeRecord {
    pub exam: String,
    pub student_name: String,
    pub avg_score: f64,
}
