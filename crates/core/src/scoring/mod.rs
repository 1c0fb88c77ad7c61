//! Exam score classification and the pass/fail dual-write service.
//!
//! - [`classification`] — the pure average-and-verdict rule.
//! - [`model`] — submission and outcome records plus their create DTOs.
//! - [`store`] — async store traits implemented by the database crate.
//! - [`memory`] — in-process store implementations.
//! - [`service`] — [`ScoreService`], which ties the above together.

pub mod classification;
pub mod memory;
pub mod model;
pub mod service;
pub mod store;

pub use classification::{classify, Classification, Verdict, PASS_THRESHOLD};
pub use model::{
    CreateOutcomeRecord, CreateScoreSubmission, ExamStudent, ScoreSubmission, StudentFail,
    StudentPass,
};
pub use service::ScoreService;
pub use store::{ScoreSubmissionStore, StudentFailStore, StudentPassStore};
