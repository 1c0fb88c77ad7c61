//! In-process implementations of the score store traits.
//!
//! Rows live in a `Mutex<Vec<T>>`; ids start at 1 and increase by one per
//! insert. Used by tests and by the `memory` store backend.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::scoring::model::{
    CreateOutcomeRecord, CreateScoreSubmission, ScoreSubmission, StudentFail, StudentPass,
};
use crate::scoring::store::{ScoreSubmissionStore, StudentFailStore, StudentPassStore};
use crate::types::DbId;

pub type InMemorySubmissionStore = MemoryTable<ScoreSubmission>;
pub type InMemoryPassStore = MemoryTable<StudentPass>;
pub type InMemoryFailStore = MemoryTable<StudentFail>;

/// Append-only table of `T` rows.
#[derive(Debug)]
pub struct MemoryTable<T> {
    rows: Mutex<Vec<T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> MemoryTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every row in insertion order.
    pub fn rows(&self) -> Result<Vec<T>, CoreError> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.lock()?.is_empty())
    }

    /// Append a row built from the next id and return a copy of it.
    fn insert_with(&self, build: impl FnOnce(DbId) -> T) -> Result<T, CoreError> {
        let mut rows = self.lock()?;
        let id = rows.len() as DbId + 1;
        let row = build(id);
        rows.push(row.clone());
        Ok(row)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, CoreError> {
        self.rows
            .lock()
            .map_err(|_| CoreError::Internal("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ScoreSubmissionStore for MemoryTable<ScoreSubmission> {
    async fn save(&self, input: CreateScoreSubmission) -> Result<ScoreSubmission, CoreError> {
        self.insert_with(|id| ScoreSubmission {
            id,
            exam: input.exam,
            student_name: input.student_name,
            kor_score: input.kor_score,
            english_score: input.english_score,
            math_score: input.math_score,
        })
    }

    async fn find_all(&self) -> Result<Vec<ScoreSubmission>, CoreError> {
        self.rows()
    }
}

#[async_trait]
impl StudentPassStore for MemoryTable<StudentPass> {
    async fn save(&self, input: CreateOutcomeRecord) -> Result<StudentPass, CoreError> {
        self.insert_with(|id| StudentPass {
            id,
            exam: input.exam,
            student_name: input.student_name,
            avg_score: input.avg_score,
        })
    }

    async fn find_all(&self) -> Result<Vec<StudentPass>, CoreError> {
        self.rows()
    }
}

#[async_trait]
impl StudentFailStore for MemoryTable<StudentFail> {
    async fn save(&self, input: CreateOutcomeRecord) -> Result<StudentFail, CoreError> {
        self.insert_with(|id| StudentFail {
            id,
            exam: input.exam,
            student_name: input.student_name,
            avg_score: input.avg_score,
        })
    }

    async fn find_all(&self) -> Result<Vec<StudentFail>, CoreError> {
        self.rows()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(exam: &str, name: &str, avg: f64) -> CreateOutcomeRecord {
        CreateOutcomeRecord {
            exam: exam.to_string(),
            student_name: name.to_string(),
            avg_score: avg,
        }
    }

    #[tokio::test]
    async fn ids_increase_per_collection() {
        let passes = InMemoryPassStore::new();
        let fails = InMemoryFailStore::new();

        let a = passes.save(outcome("e", "a", 70.0)).await.unwrap();
        let b = passes.save(outcome("e", "b", 80.0)).await.unwrap();
        let c = fails.save(outcome("e", "c", 10.0)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        // Fail ids are independent of pass ids.
        assert_eq!(c.id, 1);
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let passes = InMemoryPassStore::new();
        for name in ["x", "y", "z"] {
            passes.save(outcome("e", name, 90.0)).await.unwrap();
        }

        let names: Vec<_> = passes
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.student_name)
            .collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[tokio::test]
    async fn submission_store_keeps_raw_scores() {
        let store = InMemorySubmissionStore::new();
        assert!(store.is_empty().unwrap());

        let saved = store
            .save(CreateScoreSubmission {
                exam: "midterm".to_string(),
                student_name: "dana".to_string(),
                kor_score: -5,
                english_score: 120,
                math_score: 0,
            })
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.kor_score, -5);
        assert_eq!(saved.english_score, 120);
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.ping().await.is_ok());
    }
}
